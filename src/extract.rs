use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Invalid form data")]
    UnparsableForm,
    #[error("Invalid body parameter")]
    UnparsableNestedBody,
}

/// The three webhook fields, each optional until both extraction passes have
/// run. Empty strings never get in; an empty submission counts as absent.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MessageFields {
    pub message_sid: Option<String>,
    pub from_number: Option<String>,
    pub body: Option<String>,
}

impl MessageFields {
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.message_sid.is_none() {
            missing.push("MessageSid");
        }
        if self.from_number.is_none() {
            missing.push("From");
        }
        if self.body.is_none() {
            missing.push("Body");
        }

        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn into_parts(self) -> Result<(String, String, String), Vec<&'static str>> {
        let missing = self.missing();

        match (self.message_sid, self.from_number, self.body) {
            (Some(message_sid), Some(from_number), Some(body)) => {
                Ok((message_sid, from_number, body))
            }
            _ => Err(missing),
        }
    }

    fn filled_from(self, fallback: MessageFields) -> Self {
        MessageFields {
            message_sid: self.message_sid.or(fallback.message_sid),
            from_number: self.from_number.or(fallback.from_number),
            body: self.body.or(fallback.body),
        }
    }
}

/// Pulls `MessageSid`, `From`, and `Body` out of a form-encoded webhook body.
///
/// Two passes. The primary pass reads the provider keys directly, accepting a
/// lower-cased variant of each. The fallback pass handles the provider quirk
/// where the whole payload arrives re-encoded inside a single `body` field,
/// sometimes prefixed with a stray `?`: that carrier value is re-parsed as a
/// query string and fills whichever fields the primary pass left empty.
/// Primary values always win over nested ones.
pub fn extract_message_fields(raw: &str) -> Result<MessageFields, ExtractError> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(raw).map_err(|_| ExtractError::UnparsableForm)?;

    // The lower-cased `body` key doubles as the nested-payload carrier, so the
    // primary pass only trusts the exact provider key for the message text.
    let direct_body = first_value(&pairs, "Body");
    let carrier = first_value(&pairs, "body");

    let mut fields = MessageFields {
        message_sid: lookup(&pairs, "MessageSid", "messagesid"),
        from_number: lookup(&pairs, "From", "from"),
        body: direct_body,
    };

    if !fields.is_complete() {
        if let Some(carrier) = carrier {
            let nested = carrier.strip_prefix('?').unwrap_or(carrier.as_str());
            let nested_pairs: Vec<(String, String)> = serde_urlencoded::from_str(nested)
                .map_err(|_| ExtractError::UnparsableNestedBody)?;

            fields = fields.filled_from(MessageFields {
                message_sid: lookup(&nested_pairs, "MessageSid", "messagesid"),
                from_number: lookup(&nested_pairs, "From", "from"),
                body: lookup(&nested_pairs, "Body", "body"),
            });

            // A carrier with no nested message text is itself the text, sent
            // by a webhook that lower-cased the Body key.
            if fields.body.is_none() {
                fields.body = Some(carrier);
            }
        }
    }

    Ok(fields)
}

fn lookup(pairs: &[(String, String)], key: &str, downcased_key: &str) -> Option<String> {
    first_value(pairs, key).or_else(|| first_value(pairs, downcased_key))
}

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.clone())
}
