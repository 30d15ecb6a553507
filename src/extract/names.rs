//! Heuristics for recognizing person names in free text

/// Tokens that never belong to a name in a profile-link context
const NAME_STOPWORDS: &[&str] = &[
    "linkedin",
    "twitter",
    "founder",
    "ceo",
    "cto",
    "co-founder",
    "cofounder",
    "the",
    "and",
    "at",
];

/// Substrings that disqualify a section line from being a name
const LINE_EXCLUSIONS: &[&str] = &[
    "linkedin",
    "twitter",
    "founded",
    "batch",
    "active",
    "employees",
    "team size",
    "location",
];

/// Punctuation that ends a name run when it trails a token ("Jane Doe, CEO")
const CLAUSE_BREAKS: &[char] = &[',', ';', ':', '|', '/', '(', ')', '&', '·', '•', '-', '–'];

/// Strips surrounding punctuation from a token, keeping inner characters
fn clean_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

fn starts_uppercase(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

fn is_stopword(token: &str) -> bool {
    let lower = token.to_lowercase();
    NAME_STOPWORDS.contains(&lower.as_str())
}

/// A token that can be part of a name run
fn is_name_token(token: &str) -> bool {
    token.chars().count() > 1 && starts_uppercase(token) && !is_stopword(token)
}

fn ends_clause(raw: &str) -> bool {
    raw.ends_with(CLAUSE_BREAKS)
}

/// Finds the first run of 2 to 4 consecutive capitalized, non-stopword tokens
///
/// Tokens are split on whitespace and stripped of surrounding punctuation. A
/// token ending in a clause break (comma, pipe, ...) closes the run it
/// belongs to.
///
/// # Example
///
/// ```
/// use founder_scout::extract::find_name_run;
///
/// assert_eq!(
///     find_name_run("Jane Doe, CEO & Co-founder"),
///     Some("Jane Doe".to_string())
/// );
/// assert_eq!(find_name_run("view profile"), None);
/// ```
pub fn find_name_run(text: &str) -> Option<String> {
    let mut run: Vec<&str> = Vec::new();

    for raw in text.split_whitespace() {
        let token = clean_token(raw);

        if is_name_token(token) {
            run.push(token);
            if run.len() == 4 || ends_clause(raw) {
                if run.len() >= 2 {
                    return Some(run.join(" "));
                }
                run.clear();
            }
        } else {
            if run.len() >= 2 {
                return Some(run.join(" "));
            }
            run.clear();
        }
    }

    (run.len() >= 2).then(|| run.join(" "))
}

/// Whether a whole line of section text looks like a person's name
///
/// The line must have 2 to 4 whitespace-separated tokens, each starting with
/// an uppercase letter, and contain none of the excluded keywords.
pub fn is_name_line(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&tokens.len()) {
        return false;
    }

    if !tokens.iter().all(|t| starts_uppercase(t)) {
        return false;
    }

    let lower = line.to_lowercase();
    !LINE_EXCLUSIONS.iter().any(|keyword| lower.contains(keyword))
}
