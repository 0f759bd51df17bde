use std::sync::Arc;

use jet_core::form::{FieldValue, FileRef, FormField, FormPatch};
use jet_core::{ProfileUpdateRequest, ProviderConfig, SecretString};
use jet_infra::HeadlessViewport;
use jet_registration::{FormVariant, RegistrationServices};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

fn services_for(server: &ServerGuard) -> RegistrationServices {
    RegistrationServices::new(ProviderConfig::new(
        server.url(),
        SecretString::from("anon-key"),
    ))
    .unwrap()
}

async fn mock_current_user(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/auth/v1/user")
        .match_header("authorization", "Bearer admin-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "a1",
                "email": "hamza@jauhrteg.pk",
                "user_metadata": {}
            })
            .to_string(),
        )
        .create_async()
        .await
}

fn document(name: &str) -> FileRef {
    FileRef {
        name: name.to_string(),
        content_type: "image/jpeg".to_string(),
        size_bytes: 90_000,
        storage_path: format!("uploads/{name}"),
    }
}

#[tokio::test]
async fn completed_form_is_inserted_through_rest() {
    let mut server = Server::new_async().await;
    let insert = server
        .mock("POST", "/rest/v1/registrations")
        .match_header("apikey", "anon-key")
        .match_body(Matcher::PartialJson(json!({
            "variant": "five_step",
            "fields": { "sport": { "kind": "text", "value": "Volleyball" } }
        })))
        .with_status(201)
        .create_async()
        .await;

    let services = services_for(&server);
    let viewport = Arc::new(HeadlessViewport::new());
    let session = services
        .form_session(FormVariant::FiveStep, viewport.clone())
        .unwrap();

    session.store().update_multiple_fields(
        FormPatch::new()
            .with(FormField::TeamName, FieldValue::text("Spikers"))
            .with(FormField::InstitutionName, FieldValue::text("FAST"))
            .with(FormField::Sport, FieldValue::text("Volleyball"))
            .with(FormField::CaptainFullName, FieldValue::text("Bilal Khan"))
            .with(FormField::CaptainEmail, FieldValue::text("bilal@fast.pk"))
            .with(FormField::CaptainPhone, FieldValue::text("0321-7654321"))
            .with(FormField::CaptainIdCard, FieldValue::File(document("id.jpg")))
            .with(
                FormField::PlayerIdCards,
                FieldValue::Files(vec![document("a.jpg"), document("b.jpg")]),
            )
            .with(FormField::PaymentReceipt, FieldValue::File(document("r.jpg")))
            .with(FormField::TransactionId, FieldValue::text("EP-771"))
            .with(FormField::AcceptRules, FieldValue::Flag(true)),
    );
    session.navigator().go_to_step(5);

    let token = session.submit().await.unwrap();

    insert.assert_async().await;
    assert!(jet_core::is_valid_registration_token(token.as_str()));
    assert!(session.navigator().state().is_submitted());
    assert_eq!(viewport.scroll_count(), 2);
}

#[tokio::test]
async fn admin_header_falls_back_to_email_name() {
    let mut server = Server::new_async().await;
    let user = mock_current_user(&mut server).await;

    let admin = services_for(&server).admin(Some(SecretString::from("admin-token")));

    assert_eq!(admin.display_name.execute().await, "Hamza");
    user.assert_async().await;
}

#[tokio::test]
async fn profile_update_skips_unchanged_email() {
    let mut server = Server::new_async().await;
    let _user = mock_current_user(&mut server).await;
    let metadata = server
        .mock("PUT", "/auth/v1/user")
        .match_body(Matcher::Json(json!({ "data": { "full_name": "Hamza Ali" } })))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let admin = services_for(&server).admin(Some(SecretString::from("admin-token")));
    let result = admin
        .update_profile
        .execute(ProfileUpdateRequest {
            full_name: Some("Hamza Ali".to_string()),
            phone: Some("  ".to_string()),
            email: Some("hamza@jauhrteg.pk".to_string()),
        })
        .await;

    assert!(result.is_success());
    metadata.assert_async().await;
}

#[tokio::test]
async fn password_rejection_message_reaches_the_caller() {
    let mut server = Server::new_async().await;
    let _user = mock_current_user(&mut server).await;
    let _rejection = server
        .mock("PUT", "/auth/v1/user")
        .with_status(422)
        .with_body(r#"{"msg":"New password should be different from the old password."}"#)
        .create_async()
        .await;

    let admin = services_for(&server).admin(Some(SecretString::from("admin-token")));
    let result = admin
        .update_password
        .execute(SecretString::from("same-as-before"))
        .await;

    assert_eq!(
        result.error_message(),
        Some("New password should be different from the old password.")
    );
}

#[tokio::test]
async fn signed_out_admin_cannot_change_password() {
    let server = Server::new_async().await;
    let admin = services_for(&server).admin(None);

    let result = admin
        .update_password
        .execute(SecretString::from("whatever"))
        .await;

    assert_eq!(result.error_message(), Some("User not found"));
}

#[tokio::test]
async fn test_expired_admin_session_is_user_not_found() {
    let mut server = Server::new_async().await;
    let _lookup = server
        .mock("GET", "/auth/v1/user")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error_code":"bad_jwt","msg":"invalid JWT: token is expired"}"#)
        .create_async()
        .await;
    let write = server
        .mock("PUT", "/auth/v1/user")
        .expect(0)
        .create_async()
        .await;

    let admin = services_for(&server).admin(Some(SecretString::from("expired-token")));
    let password = admin
        .update_password
        .execute(SecretString::from("n3w-secret"))
        .await;
    let profile = admin
        .update_profile
        .execute(ProfileUpdateRequest {
            full_name: Some("Hamza Ali".to_string()),
            ..Default::default()
        })
        .await;

    assert_eq!(password.error_message(), Some("User not found"));
    assert_eq!(profile.error_message(), Some("User not found"));
    assert_eq!(admin.display_name.execute().await, "Admin");
    write.assert_async().await;
}
