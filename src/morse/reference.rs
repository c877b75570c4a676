// src/morse/reference.rs  —  Operator quick-reference: prosigns and Q-codes

/// (token as typed, meaning), sorted by token
pub const PROSIGNS: &[(&str, &str)] = &[
    ("73",    "Best regards"),
    ("<AR>",  "Newline"),
    ("<AS>",  "Wait"),
    ("<BK>",  "Break in"),
    ("<BT>",  "Break"),
    ("<HH>",  "Correction"),
    ("<KA>",  "Attention"),
    ("<KN>",  "Go ahead"),
    ("<SK>",  "Out"),
    ("<SOS>", "Distress signal"),
    ("<VE>",  "Verified"),
    ("?",     "Say again"),
    ("K",     "Over"),
    ("R",     "Roger"),
];

pub const Q_CODES: &[(&str, &str)] = &[
    ("QRA", "Station name"),
    ("QRL", "Busy"),
    ("QRM", "Interference"),
    ("QRN", "Interference by station"),
    ("QRP", "Low power"),
    ("QRS", "Slow"),
    ("QRT", "End of transmission"),
    ("QRU", "Station not in use"),
    ("QRV", "Ready"),
    ("QRZ", "Calling"),
    ("QSL", "Confirmation of reception"),
    ("QSO", "Contact"),
    ("QSP", "Relay to"),
    ("QSY", "Change frequency"),
    ("QTH", "Location"),
];
