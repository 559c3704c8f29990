use std::path::Path;

use chrono::NaiveDate;
use colored::Colorize;

use arcana_core::SpreadKind;
use arcana_reading::{KeyValueStore, UserProfile};
use arcana_reading::store::profile::PROFILE_KEY;

/// Requested changes to the profile. All `None` means just show it.
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub birthdate: Option<String>,
    pub spread: Option<String>,
    pub clear: bool,
}

impl ProfileUpdate {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.birthdate.is_none() && self.spread.is_none()
    }
}

pub fn run(dir: &Path, update: ProfileUpdate) -> Result<(), String> {
    let mut store = super::open_store(dir);

    if update.clear {
        store
            .remove(PROFILE_KEY)
            .map_err(|e| format!("could not clear profile: {e}"))?;
        println!("  Profile cleared.");
        return Ok(());
    }

    let mut profile =
        UserProfile::load(&store).map_err(|e| format!("cannot read profile: {e}"))?;

    if !update.is_empty() {
        if let Some(name) = update.name {
            let name = name.trim().to_string();
            profile.name = (!name.is_empty()).then_some(name);
        }
        if let Some(birthdate) = update.birthdate {
            let date = NaiveDate::parse_from_str(birthdate.trim(), "%Y-%m-%d")
                .map_err(|e| format!("invalid birthdate \"{birthdate}\": {e} (use YYYY-MM-DD)"))?;
            profile.birthdate = Some(date);
        }
        if let Some(spread) = update.spread {
            profile.favourite_spread = Some(SpreadKind::parse(&spread).map_err(|e| e.to_string())?);
        }
        profile
            .save(&mut store)
            .map_err(|e| format!("could not save profile: {e}"))?;
        println!("  {}", "Profile saved.".bold());
    }

    print_profile(&profile);
    Ok(())
}

fn print_profile(profile: &UserProfile) {
    let unset = || "(not set)".dimmed().to_string();
    println!(
        "  name:      {}",
        profile.name.clone().unwrap_or_else(unset)
    );
    println!(
        "  birthdate: {}",
        profile
            .birthdate
            .map(|d| d.to_string())
            .unwrap_or_else(unset)
    );
    println!(
        "  spread:    {}",
        profile
            .favourite_spread
            .map(|k| k.id().to_string())
            .unwrap_or_else(unset)
    );
}
