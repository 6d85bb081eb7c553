// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: lookup by primary key
fn id_arg() -> Arg {
    Arg::new("id")
        .short('i')
        .long("id")
        .value_name("ID")
        .help("Primary key of the entity")
}

/// Common argument: lookup by name substring
fn name_arg() -> Arg {
    Arg::new("name")
        .short('n')
        .long("name")
        .value_name("NAME")
        .help("Case-sensitive name substring")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print results as JSON")
}

fn build_cli() -> Command {
    Command::new("recipe-catalog")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Recipe Catalog Contributors")
        .about("In-memory recipe catalog with ingredient and dietary-restriction lookups")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Configuration file (TOML)"),
        )
        .arg(
            Arg::new("fixture")
                .long("fixture")
                .value_name("PATH")
                .global(true)
                .help("Seed the catalog from this fixture instead of the built-in sample"),
        )
        .subcommand(
            Command::new("serve")
                .about("Serve the catalog over HTTP")
                .arg(Arg::new("bind").short('b').long("bind").help("Address to bind to")),
        )
        .subcommand(
            Command::new("recipes")
                .about("List recipes by id or name")
                .arg(id_arg())
                .arg(name_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("by-ingredient")
                .about("List recipes that use an ingredient")
                .arg(id_arg())
                .arg(name_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("by-diet")
                .about("List recipes compliant with a dietary restriction")
                .arg(id_arg())
                .arg(name_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("delete-ingredient")
                .about("Delete an ingredient used by exactly one recipe")
                .arg(id_arg())
                .arg(name_arg()),
        )
        .subcommand(
            Command::new("delete-recipe")
                .about("Delete a recipe and its ingredient links")
                .arg(id_arg())
                .arg(name_arg()),
        )
        .subcommand(
            Command::new("add-recipe")
                .about("Add a recipe to the catalog")
                .arg(Arg::new("name").required(true).help("Recipe name"))
                .arg(Arg::new("description").long("description").required(true))
                .arg(Arg::new("servings").long("servings").required(true))
                .arg(
                    Arg::new("ingredient")
                        .long("ingredient")
                        .action(ArgAction::Append)
                        .value_name("NAME:AMOUNT:UNIT")
                        .required(true),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    if let Err(e) = fs::write(man_dir.join("recipe-catalog.1"), buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
