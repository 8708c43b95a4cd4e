/// Short commit hash stamped by `build.rs`, or `unknown` outside a checkout.
pub fn git_commit_hash() -> &'static str {
    match option_env!("LOOKOUT_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn git_commit_hash_is_never_empty() {
        assert!(!super::git_commit_hash().is_empty());
    }
}
