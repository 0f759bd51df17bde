use serde::{Deserialize, Serialize};

use super::field::FormField;
use super::progress::{ProgressLayout, FIVE_STEP_LAYOUT, SIX_STEP_LAYOUT};

/// The two registration form lengths.
///
/// Both collect the same fields; the six-step form gives player documents a
/// page of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
    FiveStep,
    SixStep,
}

const FIVE_STEP_PAGES: [&[FormField]; 5] = [
    &[FormField::TeamName, FormField::InstitutionName, FormField::Sport],
    &[
        FormField::CaptainFullName,
        FormField::CaptainEmail,
        FormField::CaptainPhone,
    ],
    &[FormField::CaptainIdCard, FormField::PlayerIdCards],
    &[FormField::PaymentReceipt, FormField::TransactionId],
    &[FormField::AcceptRules],
];

const SIX_STEP_PAGES: [&[FormField]; 6] = [
    &[FormField::TeamName, FormField::InstitutionName, FormField::Sport],
    &[
        FormField::CaptainFullName,
        FormField::CaptainEmail,
        FormField::CaptainPhone,
    ],
    &[FormField::PlayerIdCards],
    &[FormField::CaptainIdCard],
    &[FormField::PaymentReceipt, FormField::TransactionId],
    &[FormField::AcceptRules],
];

impl FormVariant {
    pub fn total_steps(self) -> u32 {
        self.pages().len() as u32
    }

    pub fn layout(self) -> &'static ProgressLayout {
        match self {
            FormVariant::FiveStep => &FIVE_STEP_LAYOUT,
            FormVariant::SixStep => &SIX_STEP_LAYOUT,
        }
    }

    /// Fields collected on `step` (1-based). Empty outside the form.
    pub fn step_fields(self, step: u32) -> &'static [FormField] {
        step.checked_sub(1)
            .and_then(|index| self.pages().get(index as usize).copied())
            .unwrap_or(&[])
    }

    /// Required fields in page order.
    pub fn required_fields(self) -> impl Iterator<Item = FormField> {
        self.pages().iter().flat_map(|page| page.iter().copied())
    }

    fn pages(self) -> &'static [&'static [FormField]] {
        match self {
            FormVariant::FiveStep => &FIVE_STEP_PAGES,
            FormVariant::SixStep => &SIX_STEP_PAGES,
        }
    }
}
