mod headless;

pub use headless::HeadlessViewport;
