use crate::{
    error::SmsWebhookError,
    extract::extract_message_fields,
    models::{IncomingMessage, MAX_BODY_LENGTH, MAX_FROM_NUMBER_LENGTH, MAX_MESSAGE_SID_LENGTH},
    persistence::save_message,
    xml::Xml,
    AppState,
};

use axum::extract::State;
use chrono::Utc;
use indoc::indoc;

const ACKNOWLEDGMENT: &str = indoc! {r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <Response><Message>Message received! Thank you.</Message></Response>"#};

#[axum_macros::debug_handler]
pub async fn post_sms(
    State(state): State<AppState>,
    form_body: String,
) -> Result<Xml<&'static str>, SmsWebhookError> {
    let fields = match extract_message_fields(&form_body) {
        Ok(fields) => fields,
        Err(e) => {
            log::warn!("Failed to parse webhook form data: {e}");
            return Err(e.into());
        }
    };

    let (message_sid, from_number, body) = match fields.into_parts() {
        Ok(parts) => parts,
        Err(missing) => {
            log::warn!("Webhook missing required fields: {}", missing.join(", "));
            return Err(SmsWebhookError::MissingFields);
        }
    };

    for (name, value, max_length) in [
        ("MessageSid", &message_sid, MAX_MESSAGE_SID_LENGTH),
        ("From", &from_number, MAX_FROM_NUMBER_LENGTH),
        ("Body", &body, MAX_BODY_LENGTH),
    ] {
        if value.chars().count() > max_length {
            log::warn!("Webhook field {name} exceeds {max_length} characters");
            return Err(SmsWebhookError::FieldTooLong);
        }
    }

    let message = IncomingMessage {
        message_sid,
        from_number,
        body,
        received_at: Utc::now().naive_utc(),
    };

    if let Err(e) = save_message(&state.db, &message).await {
        log::error!("Failed to save message: {e}");
        return Err(SmsWebhookError::Persistence(e));
    }

    log::info!("Saved SMS from {}: {}", message.from_number, message.body);

    Ok(Xml(ACKNOWLEDGMENT))
}
