mod sms;

pub use sms::*;
