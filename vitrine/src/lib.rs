pub mod accessibility;
pub mod animation;
pub mod banner;
pub mod config;
pub mod error;
pub mod form;
pub mod modal;
pub mod navigation;
pub mod page;
pub mod performance;
pub mod portfolio;
pub mod site;
pub mod submission;
pub mod theme;
pub mod timer;
pub mod validation;

pub use site::Site;

pub mod prelude {
    pub use crate::banner::{Banner, BannerHost, BannerKind};
    pub use crate::config::{FormConfig, ScrollConfig, SiteConfig, TimingConfig, TransportConfig};
    pub use crate::error::{ConfigError, FieldError, FormInvalid, SubmitError, ThemeStoreError};
    pub use crate::form::{ContactForm, FormSnapshot};
    pub use crate::modal::VideoModal;
    pub use crate::navigation::Navigation;
    pub use crate::page::standard_page;
    pub use crate::performance::{Debouncer, LazyImages, ScrollThrottle};
    pub use crate::portfolio::{PortfolioItem, PortfolioManager};
    pub use crate::site::Site;
    pub use crate::submission::{
        HttpTransport, SimulatedTransport, SubmissionController, SubmissionOutcome,
        SubmissionState, SubmitAttempt, Transport, transport_for,
    };
    pub use crate::theme::{
        FileThemeStore, MemoryThemeStore, NoThemeStore, Theme, ThemeManager, ThemeStore,
    };
    pub use crate::validation::{Field, FieldKind, FormValidator, ValidationResult};

    pub use vitrine_dom::{Document, Element, Event, Key, Modifiers};
}
