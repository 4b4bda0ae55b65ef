//! The two fixed recipient identities.

/// One configured household member: a delivery address plus the display name
/// used in completion notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub channel_id: u64,
    pub display_name: String,
}

/// Which of the two configured recipients an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// The two recipients of every reminder event. Identity is configuration,
/// not runtime state.
#[derive(Debug, Clone)]
pub struct RecipientPair {
    pub a: Recipient,
    pub b: Recipient,
}

impl RecipientPair {
    pub fn new(a: Recipient, b: Recipient) -> Self {
        Self { a, b }
    }

    pub fn get(&self, side: Side) -> &Recipient {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Identify a recipient by delivery address. Returns `None` for channels
    /// belonging to neither configured recipient.
    pub fn identify(&self, channel_id: u64) -> Option<Side> {
        if channel_id == self.a.channel_id {
            Some(Side::A)
        } else if channel_id == self.b.channel_id {
            Some(Side::B)
        } else {
            None
        }
    }
}
