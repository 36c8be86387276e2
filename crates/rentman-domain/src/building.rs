//! Closed lookup table for managed buildings.
//!
//! Adding a building is a data change here, not a code change: each entry
//! carries the transaction-number letter and the address template used when
//! a room is created without an explicit address.

/// One managed building.
pub struct Building {
    /// Canonical building code as stored on rooms (underscores, no spaces).
    pub code: &'static str,
    /// Single letter embedded in transaction numbers.
    pub letter: char,
    /// Address template with `{room}` and `{floor}` placeholders.
    pub address_template: &'static str,
}

pub const KNOWN_BUILDINGS: &[Building] = &[
    Building {
        code: "Vaman_Nivas",
        letter: 'V',
        address_template: "Vaman Nivas Room No {room}, Floor No {floor}, \
             Near Shree Pad Darshan front of Holy Cross English School, \
             Nandivali Kalyan E. Maharashtra 421306.",
    },
    Building {
        code: "Abhishek_Apartment",
        letter: 'A',
        address_template: "Abhishek Apartment Room No {room}, Floor No {floor}, \
             Near Vedang Lake City behind, Nandivali Talav, \
             Nandivali Kalyan E. Maharashtra 421306.",
    },
];

/// Letter used for building codes not present in [`KNOWN_BUILDINGS`].
/// A deliberate fallback, not an error.
pub const FALLBACK_LETTER: char = 'O';

pub fn lookup(code: &str) -> Option<&'static Building> {
    KNOWN_BUILDINGS.iter().find(|b| b.code == code)
}

/// Transaction-number letter for a building code.
pub fn letter(code: &str) -> char {
    lookup(code).map(|b| b.letter).unwrap_or(FALLBACK_LETTER)
}

/// Canonicalize a client-supplied building code (spaces → underscores).
pub fn normalize_code(code: &str) -> String {
    code.replace(' ', "_")
}

/// Unique room code, recomputed on every write: `"{room_no}_{building}"`.
pub fn room_code(room_no: i32, building: &str) -> String {
    format!("{room_no}_{building}")
}

/// Display code, recomputed on every write: `"{room_no}-{building}"`.
pub fn code_name(room_no: i32, building: &str) -> String {
    format!("{room_no}-{building}")
}

/// Room address from the building template, or `None` for unknown buildings.
pub fn derive_address(building: &str, room_no: i32, floor_no: i16) -> Option<String> {
    lookup(building).map(|b| {
        b.address_template
            .replace("{room}", &room_no.to_string())
            .replace("{floor}", &floor_no.to_string())
    })
}
