use crate::model::character::Character;

/// Returns the characters whose name contains `search_term`, ignoring case.
///
/// When `mine_only` is set the result is further restricted to characters
/// owned by `session_email`; without an email nothing is owned, so nothing is
/// returned. The relative order of `characters` is preserved.
pub fn filter_characters<'a>(
    characters: &'a [Character],
    search_term: &str,
    mine_only: bool,
    session_email: Option<&str>,
) -> Vec<&'a Character> {
    let needle = search_term.to_lowercase();

    characters
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .filter(|c| !mine_only || session_email.is_some_and(|email| c.is_owned_by(email)))
        .collect()
}
