//! Closed value enums stored as text in the database and exchanged as the
//! same text over the API.

use serde::{Deserialize, Serialize};

/// Role of a person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Tenant,
    Owner,
    Manager,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tenant => "Tenant",
            Self::Owner => "Owner",
            Self::Manager => "Manager",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Tenant" => Some(Self::Tenant),
            "Owner" => Some(Self::Owner),
            "Manager" => Some(Self::Manager),
            _ => None,
        }
    }
}

/// How a rent transaction was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMode {
    #[default]
    Cash,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    Cheque,
}

impl PaymentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Upi => "UPI",
            Self::BankTransfer => "Bank Transfer",
            Self::Cheque => "Cheque",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Cash" => Some(Self::Cash),
            "UPI" => Some(Self::Upi),
            "Bank Transfer" => Some(Self::BankTransfer),
            "Cheque" => Some(Self::Cheque),
            _ => None,
        }
    }
}

/// Room layout of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomLayout {
    #[serde(rename = "1RK")]
    OneRk,
    #[serde(rename = "1BHK")]
    OneBhk,
    #[serde(rename = "2BHK")]
    TwoBhk,
}

impl RoomLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneRk => "1RK",
            Self::OneBhk => "1BHK",
            Self::TwoBhk => "2BHK",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1RK" => Some(Self::OneRk),
            "1BHK" => Some(Self::OneBhk),
            "2BHK" => Some(Self::TwoBhk),
            _ => None,
        }
    }
}

/// Category of a notice attached to an allotment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NoticeType {
    #[serde(rename = "Rent Alert")]
    RentAlert,
    #[serde(rename = "Receipt Generation")]
    ReceiptGen,
    Normal,
    #[default]
    Other,
}

impl NoticeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RentAlert => "Rent Alert",
            Self::ReceiptGen => "Receipt Generation",
            Self::Normal => "Normal",
            Self::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Rent Alert" => Some(Self::RentAlert),
            "Receipt Generation" => Some(Self::ReceiptGen),
            "Normal" => Some(Self::Normal),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_role_via_str() {
        for role in [Role::Tenant, Role::Owner, Role::Manager] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("Landlord"), None);
    }

    #[test]
    fn should_round_trip_payment_mode_via_str() {
        for mode in [
            PaymentMode::Cash,
            PaymentMode::Upi,
            PaymentMode::BankTransfer,
            PaymentMode::Cheque,
        ] {
            assert_eq!(PaymentMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn should_serialize_payment_mode_with_spaces() {
        let json = serde_json::to_string(&PaymentMode::BankTransfer).unwrap();
        assert_eq!(json, "\"Bank Transfer\"");
        let back: PaymentMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PaymentMode::BankTransfer);
    }

    #[test]
    fn should_serialize_layout_as_short_code() {
        assert_eq!(serde_json::to_string(&RoomLayout::OneRk).unwrap(), "\"1RK\"");
        assert_eq!(RoomLayout::parse("2BHK"), Some(RoomLayout::TwoBhk));
    }

    #[test]
    fn should_default_notice_type_to_other() {
        assert_eq!(NoticeType::default(), NoticeType::Other);
        assert_eq!(NoticeType::parse("Rent Alert"), Some(NoticeType::RentAlert));
    }
}
