/// Treat an empty or whitespace-only profile name as "no profile".
pub fn normalize_profile(profile: Option<&str>) -> Option<&str> {
    profile.map(str::trim).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_profiles_are_ignored() {
        assert_eq!(normalize_profile(None), None);
        assert_eq!(normalize_profile(Some("")), None);
        assert_eq!(normalize_profile(Some("   ")), None);
    }

    #[test]
    fn named_profile_is_trimmed() {
        assert_eq!(normalize_profile(Some("bench")), Some("bench"));
        assert_eq!(normalize_profile(Some(" bench\n")), Some("bench"));
    }
}
