pub const IPL_TEAMS: [&str; 10] = [
    "Mumbai Indians",
    "Chennai Super Kings",
    "Royal Challengers Bangalore",
    "Kolkata Knight Riders",
    "Delhi Capitals",
    "Punjab Kings",
    "Rajasthan Royals",
    "Sunrisers Hyderabad",
    "Gujarat Titans",
    "Lucknow Super Giants",
];

pub const DEFAULT_TEAM_A: &str = IPL_TEAMS[0];
pub const DEFAULT_TEAM_B: &str = IPL_TEAMS[1];

// Falls back to the first team if the index is out of range.
pub fn team_at(idx: i32) -> &'static str {
    usize::try_from(idx).ok().and_then(|i| IPL_TEAMS.get(i).copied()).unwrap_or(IPL_TEAMS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_at() {
        assert_eq!(team_at(0), "Mumbai Indians");
        assert_eq!(team_at(9), "Lucknow Super Giants");
        assert_eq!(team_at(-1), "Mumbai Indians");
        assert_eq!(team_at(10), "Mumbai Indians");
    }

    #[test]
    fn test_defaults_differ() {
        assert_ne!(DEFAULT_TEAM_A, DEFAULT_TEAM_B);
    }
}
