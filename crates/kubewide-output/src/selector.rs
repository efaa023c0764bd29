use anyhow::{bail, Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::FuzzySelect;

const INTERACT_ERROR: &str = "error while interacting with the user";

/// Picks one entry out of a list. `None` means the user backed out.
pub trait Selector {
    fn select(&self, prompt: &str, candidates: &[String], current: Option<&str>) -> Result<Option<String>>;
}

/// Terminal fuzzy finder. Esc or q cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct FuzzySelector;

impl Selector for FuzzySelector {
    fn select(&self, prompt: &str, candidates: &[String], current: Option<&str>) -> Result<Option<String>> {
        if candidates.is_empty() {
            bail!("nothing to select from");
        }

        let default = current.and_then(|c| candidates.iter().position(|candidate| candidate == c)).unwrap_or(0);
        let index = FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(candidates)
            .default(default)
            .interact_opt()
            .context(INTERACT_ERROR)?;

        Ok(index.map(|i| candidates[i].clone()))
    }
}
