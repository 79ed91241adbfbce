use chrono::NaiveDateTime;

pub const MAX_MESSAGE_SID_LENGTH: usize = 50;
pub const MAX_FROM_NUMBER_LENGTH: usize = 15;

// Concatenated-SMS cap; anything longer is not a message Twilio delivers.
pub const MAX_BODY_LENGTH: usize = 1600;

/// An inbound message as accepted by the webhook, before it has a row.
#[derive(Debug)]
pub struct IncomingMessage {
    pub message_sid: String,
    pub from_number: String,
    pub body: String,
    pub received_at: NaiveDateTime,
}

/// A stored row in `sms_messages`.
#[derive(Debug, sqlx::FromRow)]
pub struct SmsMessage {
    pub id: i64,
    pub message_sid: String,
    pub from_number: String,
    pub body: String,
    pub received_at: NaiveDateTime,
}
