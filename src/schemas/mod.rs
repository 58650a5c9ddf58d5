mod inquiry;
pub mod service;

pub use inquiry::{
    Field, FieldError, FieldErrors, Inquiry, InquiryInput, Rejection, MIN_MESSAGE, MIN_NAME,
    MIN_PHONE,
};
pub use service::{Service, ServiceOption};
