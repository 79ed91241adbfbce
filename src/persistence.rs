use sqlx::PgPool;

use crate::models::IncomingMessage;

/// Appends one message to `sms_messages`. No dedupe by `message_sid`:
/// provider retries land as additional rows.
pub async fn save_message(db: &PgPool, message: &IncomingMessage) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO sms_messages (message_sid, from_number, body, received_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(&message.message_sid)
    .bind(&message.from_number)
    .bind(&message.body)
    .bind(message.received_at)
    .execute(db)
    .await?;

    Ok(())
}
