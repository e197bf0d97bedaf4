use thiserror::Error;

/// Faults raised by the controller itself
///
/// Form validation failures are not errors; they are reported through the
/// display state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowcaseError {
    #[error("color palette must contain at least one color")]
    EmptyPalette,

    #[error("gallery must contain at least one image")]
    EmptyGallery,

    #[error("accordion section {index} does not exist (have {len})")]
    UnknownSection { index: usize, len: usize },

    #[error("timing `{name}` must be greater than zero")]
    ZeroInterval { name: &'static str },
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
