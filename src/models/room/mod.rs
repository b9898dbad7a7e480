// Room module
// Static dashboard data: rooms and scheduled wake-up moments.
// Pure display records; nothing here is mutated at runtime.

/// A room card on the home dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Card background hex color
    pub accent: &'static str,
    /// Whether a light is paired in this room
    pub has_device: bool,
}

/// A scheduled light/sound moment shown as a time card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeCard {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
}

/// The rooms listed on the home screen
pub fn builtin_rooms() -> Vec<Room> {
    vec![
        Room {
            id: "entrance",
            name: "Entrance",
            icon: "🚪",
            accent: "#E8B23E",
            has_device: true,
        },
        Room {
            id: "other",
            name: "Other",
            icon: "💼",
            accent: "#6B9AC4",
            has_device: false,
        },
        Room {
            id: "study",
            name: "Study",
            icon: "📖",
            accent: "#9BC4E2",
            has_device: false,
        },
    ]
}

/// The scheduled moments shown above the room list
pub fn builtin_time_cards() -> Vec<TimeCard> {
    vec![
        TimeCard {
            id: "rise-and-shine",
            title: "Rise and shine",
            subtitle: "7:00 AM · Daily",
            icon: "☀",
        },
        TimeCard {
            id: "after-work",
            title: "After work",
            subtitle: "6:31 PM",
            icon: "✨",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_ids_are_unique() {
        let rooms = builtin_rooms();
        for (i, room) in rooms.iter().enumerate() {
            assert!(rooms.iter().skip(i + 1).all(|other| other.id != room.id));
        }
    }

    #[test]
    fn only_the_entrance_has_a_device() {
        let with_device: Vec<_> = builtin_rooms()
            .into_iter()
            .filter(|room| room.has_device)
            .collect();
        assert_eq!(with_device.len(), 1);
        assert_eq!(with_device[0].id, "entrance");
    }
}
