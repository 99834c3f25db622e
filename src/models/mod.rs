pub mod contractmodel;
pub mod feedbackmodel;
pub mod propertymodel;
pub mod usermodel;
