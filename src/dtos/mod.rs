pub mod contractdtos;
pub mod feedbackdtos;
pub mod propertydtos;
pub mod userdtos;
