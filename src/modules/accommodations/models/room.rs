use serde::{Deserialize, Serialize};

/// Room availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoomStatus {
    #[default]
    Available,
    Booked,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Booked => "Booked",
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for RoomStatus {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "Available" => Ok(Self::Available),
            "Booked" => Ok(Self::Booked),
            _ => Err(format!("Invalid room status: {}", value)),
        }
    }
}

/// A bookable room inside an accommodation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    #[serde(default)]
    pub status: RoomStatus,
}

impl Room {
    pub fn new(id: i64, room_number: impl Into<String>) -> Self {
        Self {
            id,
            room_number: room_number.into(),
            status: RoomStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }
}
