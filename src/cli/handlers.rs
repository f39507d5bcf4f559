// src/cli/handlers.rs
use std::path::Path;

use regex::Regex;
use tracing::info;

use super::args::{Cli, ExploreArgs, PeopleArgs};
use crate::config::Config;
use crate::dataset::{Attribute, AttributeFilter, ReferenceDataset};
use crate::error::Result;
use crate::explore::Explorer;
use crate::graph::source::{LinkSource, MemorySource};
use crate::graph::wiki::WikipediaSource;
use crate::reporting::{self, OutputFormat, Toggles};

/// Loads config from `--config` or `./wikinet.toml`, then applies the
/// global `--dataset` override.
///
/// # Errors
/// Returns error if the config file is malformed.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = &cli.dataset {
        config.dataset.path = path.display().to_string();
    }
    Ok(config)
}

/// Folds explore flags into the config.
pub fn apply_overrides(config: &mut Config, args: &ExploreArgs) {
    let explore = &mut config.explore;
    if let Some(max) = args.max_links {
        explore.max_links = max;
    }
    if let Some(mode) = args.mode {
        explore.classify = mode;
    }
    if let Some(dims) = args.dims {
        explore.dims = dims;
    }
    if let Some(seed) = args.seed {
        explore.seed = seed;
    }
    if args.parallel {
        config.source.parallel_backlinks = true;
    }
}

/// Runs `wikinet explore`.
///
/// # Errors
/// Returns error if the dataset or links file cannot be loaded, or the
/// person is unknown in membership mode.
pub fn handle_explore(mut config: Config, args: &ExploreArgs) -> Result<()> {
    apply_overrides(&mut config, args);
    let dataset = ReferenceDataset::load(Path::new(&config.dataset.path))?;

    let source: Box<dyn LinkSource> = match &args.links_file {
        Some(path) => Box::new(MemorySource::from_json_file(path)?),
        None => Box::new(WikipediaSource::new(&config.source)?),
    };

    info!(person = %args.person, max_links = config.explore.max_links, "exploring");
    let explorer = Explorer::new(&dataset, source.as_ref(), &config);
    let exploration = explorer.explore(&args.person, &args.filter())?;

    match args.format {
        OutputFormat::Terminal => reporting::print_scene(
            &exploration.scene,
            Toggles {
                incoming: args.show_incoming,
                outgoing: args.show_outgoing,
            },
        ),
        OutputFormat::Json => reporting::print_json(&exploration.scene)?,
    }
    Ok(())
}

/// Runs `wikinet people`.
///
/// # Errors
/// Returns error if the dataset cannot be loaded or the pattern is invalid.
pub fn handle_people(config: &Config, args: &PeopleArgs) -> Result<()> {
    let dataset = ReferenceDataset::load(Path::new(&config.dataset.path))?;
    if args.values {
        for attribute in [Attribute::Gender, Attribute::Occupation, Attribute::Nationality] {
            reporting::print_options(attribute, &dataset.distinct(attribute));
        }
        return Ok(());
    }
    let names = select_people(&dataset, args)?;
    reporting::print_people(&names);
    Ok(())
}

/// Sorted names passing the pattern and gender selection.
///
/// # Errors
/// Returns error if the pattern is not a valid regular expression.
pub fn select_people<'a>(dataset: &'a ReferenceDataset, args: &PeopleArgs) -> Result<Vec<&'a str>> {
    let pattern = args.matching.as_deref().map(Regex::new).transpose()?;
    let filter = AttributeFilter {
        genders: args.genders.clone(),
        ..Default::default()
    };
    Ok(dataset
        .names()
        .into_iter()
        .filter(|name| pattern.as_ref().map_or(true, |re| re.is_match(name)))
        .filter(|name| filter.accepts(dataset.get(name)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::PersonRecord;

    fn dataset() -> ReferenceDataset {
        let mut a = PersonRecord::new("Gabriela Mistral");
        a.gender = Some("Female".into());
        let mut b = PersonRecord::new("Pablo Neruda");
        b.gender = Some("Male".into());
        let mut c = PersonRecord::new("Frida Kahlo");
        c.gender = Some("Female".into());
        ReferenceDataset::from_records([a, b, c])
    }

    #[test]
    fn test_select_people() {
        let ds = dataset();
        let all = PeopleArgs {
            matching: None,
            genders: Vec::new(),
            values: false,
        };
        assert_eq!(
            select_people(&ds, &all).unwrap(),
            vec!["Frida Kahlo", "Gabriela Mistral", "Pablo Neruda"]
        );

        let women_f = PeopleArgs {
            matching: Some("^F".into()),
            genders: vec!["Female".into()],
            values: false,
        };
        assert_eq!(select_people(&ds, &women_f).unwrap(), vec!["Frida Kahlo"]);

        let bad = PeopleArgs {
            matching: Some("(".into()),
            genders: Vec::new(),
            values: false,
        };
        assert!(select_people(&ds, &bad).is_err());
    }
}
