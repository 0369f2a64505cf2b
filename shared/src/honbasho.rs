//! Grand Sumo Tournament (Ozumo Honbasho) schedule calculations.
//!
//! Six tournaments are held every year, in odd-numbered months. A tournament
//! starts on the 2nd Sunday of its month and lasts for 15 consecutive days,
//! so the final day falls on the 4th Sunday of the month.

use chrono::{Days, Month, NaiveDate, Weekday};
use tracing::debug;

/// Number of consecutive days a tournament runs for.
pub const TOURNAMENT_DAYS: u64 = 15;

/// Earliest year the current six-tournament structure is considered valid.
pub const MIN_YEAR: i32 = 2012;

/// Latest year a schedule can be calculated for. Dates are rendered with a
/// four-digit year, so anything past 9999 is not representable on the wire.
pub const MAX_YEAR: i32 = 9999;

/// The tournaments held in a year. The discriminant is the month the
/// corresponding tournament is held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basho {
    Hatsu = 1,
    Haru = 3,
    Natsu = 5,
    Nagoya = 7,
    Aki = 9,
    Kyushu = 11,
}

impl Basho {
    /// All tournaments, ascending by month.
    pub const ALL: [Basho; 6] = [
        Basho::Hatsu,
        Basho::Haru,
        Basho::Natsu,
        Basho::Nagoya,
        Basho::Aki,
        Basho::Kyushu,
    ];

    /// Canonical tournament name as exposed by the API.
    pub fn name(self) -> &'static str {
        match self {
            Basho::Hatsu => "HATSU",
            Basho::Haru => "HARU",
            Basho::Natsu => "NATSU",
            Basho::Nagoya => "NAGOYA",
            Basho::Aki => "AKI",
            Basho::Kyushu => "KYUSHU",
        }
    }

    /// The month number (1-12) of this tournament.
    pub fn month(self) -> u32 {
        self as u32
    }

    /// The English month name of this tournament.
    pub fn month_name(self) -> &'static str {
        Month::try_from(self as u8)
            .expect("basho discriminants are valid months")
            .name()
    }
}

/// One tournament's dates for a given year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentSchedule {
    pub basho: Basho,
    pub dates: Vec<NaiveDate>,
}

/// Gets the tournament schedule for a given year.
///
/// Pure and deterministic: no bounds policy is applied here (the endpoint
/// owns validation), and the result is recomputed on every call.
pub fn calculate_schedule(year: i32) -> Vec<TournamentSchedule> {
    Basho::ALL
        .into_iter()
        .map(|basho| {
            debug!("Month: {}", basho.month_name());
            TournamentSchedule {
                basho,
                dates: get_dates(year, basho),
            }
        })
        .collect()
}

/// Gets the tournament dates (in chronological order) of a given year and basho.
///
/// Day 1 is the 2nd Sunday of the tournament month; days 2-15 follow
/// consecutively.
pub fn get_dates(year: i32, basho: Basho) -> Vec<NaiveDate> {
    let day_one = NaiveDate::from_weekday_of_month_opt(year, basho.month(), Weekday::Sun, 2)
        .expect("every month has a second Sunday");
    (0..TOURNAMENT_DAYS)
        .map(|offset| day_one + Days::new(offset))
        .collect()
}
