// src/reporting/console.rs
use std::collections::BTreeMap;

use colored::{ColoredString, Colorize};

use crate::dataset::Attribute;
use crate::graph::link_graph::NodeRole;
use crate::present::{Distribution, Notice, Scene};
use crate::reporting::shared::{pluralize, truncate};

const NAME_WIDTH: usize = 28;
const ATTR_WIDTH: usize = 16;
const BAR_WIDTH: usize = 30;

/// Which optional link lists to print.
#[derive(Debug, Clone, Copy, Default)]
pub struct Toggles {
    pub incoming: bool,
    pub outgoing: bool,
}

/// Prints an exploration: notice, node metrics, distributions and the
/// requested link lists.
pub fn print_scene(scene: &Scene, toggles: Toggles) {
    println!("{}", scene.title.bold());
    print_notice(&scene.notice);

    if scene.notice.has_data() {
        println!();
        print_table(scene);
        for dist in &scene.distributions {
            print_distribution(dist);
        }
    }

    if toggles.incoming {
        print_links("Incoming links", &scene.incoming);
    }
    if toggles.outgoing {
        print_links("Outgoing links", &scene.outgoing);
    }
}

fn print_notice(notice: &Notice) {
    match notice {
        Notice::Success(msg) => println!("{} {msg}", "OK".green().bold()),
        Notice::NoData(msg) => println!("{} {msg}", "~".yellow().bold()),
        Notice::NotFound(msg) | Notice::Unreachable(msg) => {
            println!("{} {msg}", "X".red().bold());
        }
    }
}

fn print_table(scene: &Scene) {
    println!("{}", "Node Metrics".cyan().bold());
    println!(
        "  {:<NAME_WIDTH$} {:<ATTR_WIDTH$} {:<ATTR_WIDTH$} {:>4} {:>4} {:>9}",
        "Name", "Gender", "Occupation", "In", "Out", "PageRank"
    );
    for row in &scene.table {
        let role = scene
            .nodes
            .iter()
            .find(|n| n.label == row.name)
            .map_or(NodeRole::Unrelated, |n| n.role);
        println!(
            "{} {:<NAME_WIDTH$} {:<ATTR_WIDTH$} {:<ATTR_WIDTH$} {:>4} {:>4} {:>9.5}",
            role_marker(role),
            truncate(&row.name, NAME_WIDTH),
            truncate(&row.gender, ATTR_WIDTH),
            truncate(&row.occupation, ATTR_WIDTH),
            row.in_degree,
            row.out_degree,
            row.centrality
        );
    }
    println!();
}

fn role_marker(role: NodeRole) -> ColoredString {
    match role {
        NodeRole::Focal => "*".yellow().bold(),
        NodeRole::IncomingOnly => "<".red(),
        NodeRole::OutgoingOnly => ">".blue(),
        NodeRole::Both => "=".magenta(),
        NodeRole::Unrelated => " ".normal(),
    }
}

fn print_distribution(dist: &Distribution) {
    println!("{}", format!("By {}", dist.attribute.column()).cyan().bold());
    let max = dist.counts.first().map_or(1, |(_, c)| (*c).max(1));
    for (value, count) in &dist.counts {
        let bar = "█".repeat((count * BAR_WIDTH + max - 1) / max);
        println!(
            "  {:<ATTR_WIDTH$} {} {count}",
            truncate(value, ATTR_WIDTH),
            bar.blue()
        );
    }
    println!();
}

fn print_links(heading: &str, links: &[String]) {
    println!(
        "{} ({} {})",
        heading.cyan().bold(),
        links.len(),
        pluralize("link", links.len())
    );
    for link in links {
        println!("  {} {link}", "-".dimmed());
    }
    println!();
}

/// Prints catalogued names, one per line.
pub fn print_people(names: &[&str]) {
    for name in names {
        println!("{name}");
    }
    println!(
        "{}",
        format!("{} {}", names.len(), pluralize("name", names.len())).dimmed()
    );
}

/// Prints the distinct values of one attribute with their counts.
pub fn print_options(attribute: Attribute, values: &BTreeMap<&str, usize>) {
    println!("{}", attribute.column().cyan().bold());
    for (value, count) in values {
        println!("  {value} {}", format!("({count})").dimmed());
    }
    println!();
}
