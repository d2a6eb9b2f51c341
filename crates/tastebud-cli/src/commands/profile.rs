use anyhow::Result;
use clap::Args;
use colored::Colorize;

use tastebud_application::AppContext;
use tastebud_core::user::{
    AVATAR_OPTIONS, DIETARY_PREFERENCES, DINING_OCCASIONS, MEAL_CATEGORIES, OnboardingForm,
    TASTE_PROFILES, UserProfile, toggle_preference,
};
use tastebud_infrastructure::TastebudPaths;

#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub avatar: Option<String>,
    /// Toggle a taste (repeatable)
    #[arg(long = "taste")]
    pub tastes: Vec<String>,
    /// Toggle a dietary preference (repeatable)
    #[arg(long = "dietary")]
    pub dietary: Vec<String>,
    /// Toggle a meal category (repeatable)
    #[arg(long = "meal")]
    pub meals: Vec<String>,
    /// Toggle a dining occasion (repeatable)
    #[arg(long = "occasion")]
    pub occasions: Vec<String>,
    #[arg(long)]
    pub budget_min: Option<u32>,
    #[arg(long)]
    pub budget_max: Option<u32>,
}

impl ProfileArgs {
    /// Applies the edits on top of `profile`.
    pub fn apply(self, mut profile: UserProfile) -> UserProfile {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(location) = self.location {
            profile.location = location;
        }
        if let Some(avatar) = self.avatar {
            profile.avatar = avatar;
        }
        for taste in &self.tastes {
            toggle_preference(&mut profile.taste_profile, taste);
        }
        for item in &self.dietary {
            toggle_preference(&mut profile.dietary_preferences, item);
        }
        for item in &self.meals {
            toggle_preference(&mut profile.meal_categories, item);
        }
        for item in &self.occasions {
            toggle_preference(&mut profile.dining_occasions, item);
        }
        if let Some(min) = self.budget_min {
            profile.budget_min = min;
        }
        if let Some(max) = self.budget_max {
            profile.budget_max = max;
        }
        profile
    }
}

pub async fn onboard(
    paths: TastebudPaths,
    name: String,
    location: String,
    tags: Vec<String>,
) -> Result<()> {
    let mut form = OnboardingForm::new();
    form.name = name;
    form.location = location;
    form.next()?;
    for tag in &tags {
        form.toggle_tag(tag);
    }
    let profile = form.finish()?;

    let context = AppContext::load(paths).await;
    context.profile_service.save(&profile).await?;

    println!(
        "{}",
        format!("Welcome, {}! Your feed is ready.", profile.name)
            .bright_green()
            .bold()
    );
    Ok(())
}

pub async fn show(paths: TastebudPaths) -> Result<()> {
    let context = AppContext::load(paths).await;
    let profile = context.discovery.profile().await;

    println!(
        "{} {}",
        profile.avatar,
        profile.greeting_name().bright_white().bold()
    );
    if !profile.location.is_empty() {
        println!("  {}", profile.location.bright_black());
    }
    print_category("Tastes", &profile.taste_profile, &TASTE_PROFILES);
    print_category("Dietary", &profile.dietary_preferences, &DIETARY_PREFERENCES);
    print_category("Meals", &profile.meal_categories, &MEAL_CATEGORIES);
    print_category("Occasions", &profile.dining_occasions, &DINING_OCCASIONS);
    println!(
        "  {:<10} ₱{}-{}",
        "Budget".cyan(),
        profile.budget_min,
        profile.budget_max
    );
    Ok(())
}

fn print_category(label: &str, selected: &[String], options: &[&str]) {
    let rendered: Vec<String> = options
        .iter()
        .map(|option| {
            if selected.iter().any(|s| s == option) {
                option.bright_green().to_string()
            } else {
                option.bright_black().to_string()
            }
        })
        .collect();
    println!("  {:<10} {}", label.cyan(), rendered.join(" "));
}

pub async fn set(paths: TastebudPaths, args: ProfileArgs) -> Result<()> {
    if let Some(avatar) = &args.avatar {
        if !AVATAR_OPTIONS.contains(&avatar.as_str()) {
            anyhow::bail!("Avatar must be one of: {}", AVATAR_OPTIONS.join(" "));
        }
    }

    let context = AppContext::load(paths).await;
    let profile = args.apply(context.discovery.profile().await);
    context.discovery.save_preferences(profile).await?.await?;

    println!("{}", "Preferences saved".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_toggles_and_overrides() {
        let profile = UserProfile {
            name: "Ana".to_string(),
            taste_profile: vec!["Spicy".to_string(), "Sweet".to_string()],
            ..UserProfile::default()
        };
        let args = ProfileArgs {
            location: Some("Pasig".to_string()),
            tastes: vec!["Sweet".to_string(), "Umami".to_string()],
            meals: vec!["Brunch".to_string()],
            budget_max: Some(800),
            ..ProfileArgs::default()
        };

        let updated = args.apply(profile);
        assert_eq!(updated.name, "Ana");
        assert_eq!(updated.location, "Pasig");
        assert_eq!(updated.taste_profile, vec!["Spicy", "Umami"]);
        assert_eq!(updated.meal_categories, vec!["Brunch"]);
        assert_eq!(updated.budget_min, 50);
        assert_eq!(updated.budget_max, 800);
    }
}
