//! Field model and inline validation rules for the booking form.

/// The named controls of the booking form, by wire name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Website,
    PreferredDate,
    TimePreference,
    Message,
    LeadSource,
    Privacy,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Website => "website",
            Field::PreferredDate => "preferredDate",
            Field::TimePreference => "timePreference",
            Field::Message => "message",
            Field::LeadSource => "leadSource",
            Field::Privacy => "privacy",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Email => FieldKind::Email,
            Field::Phone => FieldKind::Tel,
            Field::Privacy => FieldKind::Checkbox,
            Field::PreferredDate => FieldKind::DateTime,
            Field::TimePreference | Field::LeadSource => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }
}

/// Fields that must validate before a submission goes out.
pub const REQUIRED_FIELDS: [Field; 6] = [
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Phone,
    Field::Company,
    Field::Privacy,
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Checkbox,
    DateTime,
    Select,
}

pub const MSG_REQUIRED: &str = "Dieses Feld ist erforderlich";
pub const MSG_EMAIL: &str = "Bitte geben Sie eine gültige E-Mail-Adresse ein";
pub const MSG_PHONE: &str = "Bitte geben Sie eine gültige Telefonnummer ein";

/// Outcome of validating one field value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verdict {
    Valid,
    MissingValue,
    FormatInvalid(&'static str),
}

impl Verdict {
    pub fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            Verdict::Valid => None,
            Verdict::MissingValue => Some(MSG_REQUIRED),
            Verdict::FormatInvalid(msg) => Some(msg),
        }
    }
}

/// Validate one field value the way the blur handler does: trim first,
/// an empty value is always missing, format checks apply to email and
/// phone fields, anything else passes on a non-empty value.
pub fn validate(kind: FieldKind, raw: &str) -> Verdict {
    let value = raw.trim();
    if value.is_empty() {
        return Verdict::MissingValue;
    }
    match kind {
        FieldKind::Email if !is_valid_email(value) => Verdict::FormatInvalid(MSG_EMAIL),
        FieldKind::Tel if !is_valid_phone(value) => Verdict::FormatInvalid(MSG_PHONE),
        _ => Verdict::Valid,
    }
}

// No whitespace anywhere, a non-empty local part, a single '@' and a
// domain with characters on both sides of a dot.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match value.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

// Optional leading '+', then at least ten characters drawn from
// digits, whitespace, hyphens and parentheses.
fn is_valid_phone(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    digits.chars().count() >= 10
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
}

/// Visual state of one input, mirrored into its border color and the
/// inline message slot underneath it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldState {
    /// Untouched, or reset after a successful submission.
    Pristine,
    /// The user is typing a non-empty value; errors are cleared
    /// optimistically until the next blur or submit re-validates.
    Editing,
    Valid,
    Invalid(&'static str),
}

impl FieldState {
    pub fn border_color(self) -> &'static str {
        match self {
            FieldState::Pristine => "#ffffff",
            FieldState::Editing => "#6b7280",
            FieldState::Valid => "#22c55e",
            FieldState::Invalid(_) => "#ef4444",
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            FieldState::Invalid(msg) => Some(msg),
            _ => None,
        }
    }
}

impl From<Verdict> for FieldState {
    fn from(verdict: Verdict) -> Self {
        match verdict.message() {
            None => FieldState::Valid,
            Some(msg) => FieldState::Invalid(msg),
        }
    }
}

/// Form values as the controller holds them. Everything is a string
/// except the consent checkbox.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct BookingFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub website: String,
    pub preferred_date: String,
    pub time_preference: String,
    pub message: String,
    pub lead_source: String,
    pub privacy: bool,
}

impl BookingFields {
    /// Value a field contributes to validation; the checkbox maps to
    /// the submitted "on"/"" convention.
    pub fn value_of(&self, field: Field) -> String {
        match field {
            Field::FirstName => self.first_name.clone(),
            Field::LastName => self.last_name.clone(),
            Field::Email => self.email.clone(),
            Field::Phone => self.phone.clone(),
            Field::Company => self.company.clone(),
            Field::Website => self.website.clone(),
            Field::PreferredDate => self.preferred_date.clone(),
            Field::TimePreference => self.time_preference.clone(),
            Field::Message => self.message.clone(),
            Field::LeadSource => self.lead_source.clone(),
            Field::Privacy => {
                if self.privacy {
                    "on".to_string()
                } else {
                    String::new()
                }
            }
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Company => self.company = value,
            Field::Website => self.website = value,
            Field::PreferredDate => self.preferred_date = value,
            Field::TimePreference => self.time_preference = value,
            Field::Message => self.message = value,
            Field::LeadSource => self.lead_source = value,
            Field::Privacy => self.privacy = value == "on",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [FieldKind; 6] = [
        FieldKind::Text,
        FieldKind::Email,
        FieldKind::Tel,
        FieldKind::Checkbox,
        FieldKind::DateTime,
        FieldKind::Select,
    ];

    #[test]
    fn empty_after_trim_is_missing_for_every_kind() {
        for kind in ALL_KINDS {
            assert_eq!(validate(kind, ""), Verdict::MissingValue);
            assert_eq!(validate(kind, "   "), Verdict::MissingValue);
            assert_eq!(validate(kind, "\t\n"), Verdict::MissingValue);
        }
    }

    #[test]
    fn email_needs_local_part_at_sign_and_dotted_domain() {
        assert_eq!(validate(FieldKind::Email, "max@example.com"), Verdict::Valid);
        assert_eq!(
            validate(FieldKind::Email, "max.mustermann@mail.example.de"),
            Verdict::Valid
        );
        assert_eq!(validate(FieldKind::Email, "  max@example.com  "), Verdict::Valid);

        for bad in [
            "plainaddress",
            "@example.com",
            "max@example",
            "max@.com",
            "max@example.",
            "max mustermann@example.com",
            "max@exam ple.com",
            "max@@example.com",
        ] {
            assert_eq!(
                validate(FieldKind::Email, bad),
                Verdict::FormatInvalid(MSG_EMAIL),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn phone_accepts_ten_or_more_dial_characters() {
        assert_eq!(validate(FieldKind::Tel, "+49 170 1234567"), Verdict::Valid);
        assert_eq!(validate(FieldKind::Tel, "(030) 12345678"), Verdict::Valid);
        assert_eq!(validate(FieldKind::Tel, "030-123-45678"), Verdict::Valid);
        assert_eq!(validate(FieldKind::Tel, "0301234567"), Verdict::Valid);
    }

    #[test]
    fn phone_rejects_short_values_and_foreign_characters() {
        assert_eq!(validate(FieldKind::Tel, "12345"), Verdict::FormatInvalid(MSG_PHONE));
        assert_eq!(
            validate(FieldKind::Tel, "0170 CALL ME"),
            Verdict::FormatInvalid(MSG_PHONE)
        );
        assert_eq!(
            validate(FieldKind::Tel, "030/1234567890"),
            Verdict::FormatInvalid(MSG_PHONE)
        );
    }

    #[test]
    fn plus_prefix_does_not_count_toward_the_minimum() {
        assert_eq!(validate(FieldKind::Tel, "+123456789"), Verdict::FormatInvalid(MSG_PHONE));
        assert_eq!(validate(FieldKind::Tel, "+1234567890"), Verdict::Valid);
    }

    #[test]
    fn non_empty_is_enough_for_plain_kinds() {
        assert_eq!(validate(FieldKind::Text, "Musterfirma GmbH"), Verdict::Valid);
        assert_eq!(validate(FieldKind::Select, "vormittag"), Verdict::Valid);
        assert_eq!(validate(FieldKind::DateTime, "2025-06-01T10:00"), Verdict::Valid);
        assert_eq!(validate(FieldKind::Checkbox, "on"), Verdict::Valid);
    }

    #[test]
    fn unchecked_consent_counts_as_missing() {
        let fields = BookingFields::default();
        assert_eq!(
            validate(Field::Privacy.kind(), &fields.value_of(Field::Privacy)),
            Verdict::MissingValue
        );

        let mut checked = BookingFields::default();
        checked.privacy = true;
        assert_eq!(
            validate(Field::Privacy.kind(), &checked.value_of(Field::Privacy)),
            Verdict::Valid
        );
    }

    #[test]
    fn verdict_maps_to_message_and_field_state() {
        assert_eq!(Verdict::Valid.message(), None);
        assert_eq!(Verdict::MissingValue.message(), Some(MSG_REQUIRED));
        assert_eq!(
            Verdict::FormatInvalid(MSG_EMAIL).message(),
            Some(MSG_EMAIL)
        );

        assert_eq!(FieldState::from(Verdict::Valid), FieldState::Valid);
        assert_eq!(
            FieldState::from(Verdict::MissingValue),
            FieldState::Invalid(MSG_REQUIRED)
        );
        assert_eq!(
            FieldState::from(Verdict::FormatInvalid(MSG_PHONE)),
            FieldState::Invalid(MSG_PHONE)
        );
    }

    #[test]
    fn field_states_carry_the_original_border_colors() {
        assert_eq!(FieldState::Pristine.border_color(), "#ffffff");
        assert_eq!(FieldState::Editing.border_color(), "#6b7280");
        assert_eq!(FieldState::Valid.border_color(), "#22c55e");
        assert_eq!(FieldState::Invalid(MSG_REQUIRED).border_color(), "#ef4444");
        assert_eq!(FieldState::Editing.message(), None);
    }

    #[test]
    fn required_set_matches_the_form_contract() {
        let names: Vec<&str> = REQUIRED_FIELDS.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec!["firstName", "lastName", "email", "phone", "company", "privacy"]
        );
    }
}
