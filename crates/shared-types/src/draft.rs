use std::fmt;
use std::str::FromStr;

use crate::parcel::{ContactDetails, CreateParcelRequest};

// ---------------------------------------------------------------------------
// Draft fields
// ---------------------------------------------------------------------------

/// One of the ten inputs on the shipment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    SenderName,
    SenderEmail,
    SenderPhone,
    SenderAddress,
    RecipientName,
    RecipientEmail,
    RecipientPhone,
    RecipientAddress,
    Weight,
    Description,
}

impl DraftField {
    /// Every draft field in form order.
    pub const ALL: [DraftField; 10] = [
        DraftField::SenderName,
        DraftField::SenderEmail,
        DraftField::SenderPhone,
        DraftField::SenderAddress,
        DraftField::RecipientName,
        DraftField::RecipientEmail,
        DraftField::RecipientPhone,
        DraftField::RecipientAddress,
        DraftField::Weight,
        DraftField::Description,
    ];

    pub const SENDER: [DraftField; 4] = [
        DraftField::SenderName,
        DraftField::SenderEmail,
        DraftField::SenderPhone,
        DraftField::SenderAddress,
    ];

    pub const RECIPIENT: [DraftField; 4] = [
        DraftField::RecipientName,
        DraftField::RecipientEmail,
        DraftField::RecipientPhone,
        DraftField::RecipientAddress,
    ];

    /// The HTML `name` attribute of the input bound to this field.
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::SenderName => "senderName",
            DraftField::SenderEmail => "senderEmail",
            DraftField::SenderPhone => "senderPhone",
            DraftField::SenderAddress => "senderAddress",
            DraftField::RecipientName => "recipientName",
            DraftField::RecipientEmail => "recipientEmail",
            DraftField::RecipientPhone => "recipientPhone",
            DraftField::RecipientAddress => "recipientAddress",
            DraftField::Weight => "weight",
            DraftField::Description => "description",
        }
    }

    /// Look up a field by its input name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DraftField::SenderName => "Sender's Name",
            DraftField::SenderEmail => "Sender's Email",
            DraftField::SenderPhone => "Sender's Phone",
            DraftField::SenderAddress => "Sender's Address",
            DraftField::RecipientName => "Recipient's Name",
            DraftField::RecipientEmail => "Recipient's Email",
            DraftField::RecipientPhone => "Recipient's Phone",
            DraftField::RecipientAddress => "Recipient's Address",
            DraftField::Weight => "Weight (kg)",
            DraftField::Description => "Parcel Description",
        }
    }

    /// HTML input type. `Description` renders as a textarea and reports "text".
    pub fn input_type(&self) -> &'static str {
        match self {
            DraftField::SenderEmail | DraftField::RecipientEmail => "email",
            DraftField::SenderPhone | DraftField::RecipientPhone => "tel",
            DraftField::Weight => "number",
            _ => "text",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown draft field: {s}"))
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// In-progress values of the shipment form. Every field is raw input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParcelDraft {
    pub sender_name: String,
    pub sender_email: String,
    pub sender_phone: String,
    pub sender_address: String,
    pub recipient_name: String,
    pub recipient_email: String,
    pub recipient_phone: String,
    pub recipient_address: String,
    pub weight: String,
    pub description: String,
}

impl ParcelDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::SenderName => &self.sender_name,
            DraftField::SenderEmail => &self.sender_email,
            DraftField::SenderPhone => &self.sender_phone,
            DraftField::SenderAddress => &self.sender_address,
            DraftField::RecipientName => &self.recipient_name,
            DraftField::RecipientEmail => &self.recipient_email,
            DraftField::RecipientPhone => &self.recipient_phone,
            DraftField::RecipientAddress => &self.recipient_address,
            DraftField::Weight => &self.weight,
            DraftField::Description => &self.description,
        }
    }

    /// Replace a single field, leaving the others untouched.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::SenderName => &mut self.sender_name,
            DraftField::SenderEmail => &mut self.sender_email,
            DraftField::SenderPhone => &mut self.sender_phone,
            DraftField::SenderAddress => &mut self.sender_address,
            DraftField::RecipientName => &mut self.recipient_name,
            DraftField::RecipientEmail => &mut self.recipient_email,
            DraftField::RecipientPhone => &mut self.recipient_phone,
            DraftField::RecipientAddress => &mut self.recipient_address,
            DraftField::Weight => &mut self.weight,
            DraftField::Description => &mut self.description,
        };
        *slot = value.into();
    }

    /// Build the nested create payload. The weight is coerced with
    /// [`parse_weight`] and is not validated.
    pub fn to_request(&self) -> CreateParcelRequest {
        CreateParcelRequest {
            sender: ContactDetails {
                name: self.sender_name.clone(),
                email: self.sender_email.clone(),
                phone: self.sender_phone.clone(),
                address: self.sender_address.clone(),
            },
            recipient: ContactDetails {
                name: self.recipient_name.clone(),
                email: self.recipient_email.clone(),
                phone: self.recipient_phone.clone(),
                address: self.recipient_address.clone(),
            },
            weight: parse_weight(&self.weight),
            description: self.description.clone(),
        }
    }
}

/// Coerce weight text to a number the way JavaScript's `parseFloat` does:
/// skip leading whitespace, parse the longest numeric prefix, and return NaN
/// when there is none.
pub fn parse_weight(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
