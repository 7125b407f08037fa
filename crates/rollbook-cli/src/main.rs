//! `rollbook` — command-line front end for the Rollbook roster.
//!
//! Each invocation loads the roster snapshot, executes one command against
//! it, prints the feedback, and writes the snapshot back.
//!
//! # Usage
//!
//! ```
//! rollbook student --name "John Doe" --module CS1101S --phone 98765432 \
//!   --email JohnD@example.com --gender M --location "UTown Residences" \
//!   --tag friends
//! rollbook find --module cs1101s
//! rollbook edit 1 --phone 91112222
//! ```

use std::{
  collections::BTreeSet,
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rollbook_commands::{
  AddCommand, ClearCommand, Command, DeleteCommand, EditCommand,
  FindCommand, ListCommand, Model,
};
use rollbook_core::{
  descriptor::EditDescriptor,
  field::{
    Email, Gender, GithubUsername, Location, ModuleCode, Name, OfficeHour,
    Phone, Rating, Specialisation, Tag, Year,
  },
  filter::PersonFilter,
  person::{Person, PersonData},
  roster::Roster,
};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "rollbook", about = "Role-typed campus contact roster")]
struct Cli {
  /// Path to a TOML config file (default snapshot path).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Path to the roster snapshot file.
  #[arg(short, long, env = "ROLLBOOK_FILE")]
  file: Option<PathBuf>,

  #[command(subcommand)]
  command: Cmd,
}

/// Fields common to every add subcommand.
#[derive(Args)]
struct PersonArgs {
  #[arg(long)]
  name: String,

  /// Digits only.
  #[arg(long)]
  phone: String,

  #[arg(long)]
  email: String,

  /// M or F.
  #[arg(long)]
  gender: String,

  #[arg(long)]
  location: String,

  /// GitHub username; omitted entirely when not supplied.
  #[arg(long)]
  github: Option<String>,

  /// May be given multiple times.
  #[arg(long = "tag", value_name = "TAG")]
  tags: Vec<String>,
}

#[derive(Subcommand)]
enum Cmd {
  /// Add a student.
  Student {
    #[command(flatten)]
    person: PersonArgs,

    /// Enrolled module; may be given multiple times.
    #[arg(long = "module", value_name = "CODE")]
    modules: Vec<String>,
  },

  /// Add a professor.
  Prof {
    #[command(flatten)]
    person: PersonArgs,

    /// The module this professor teaches.
    #[arg(long = "module", value_name = "CODE")]
    module: Option<String>,

    /// Teaching rating, 0 to 5.
    #[arg(long)]
    rating: Option<String>,

    #[arg(long)]
    specialisation: Option<String>,
  },

  /// Add a teaching assistant.
  Ta {
    #[command(flatten)]
    person: PersonArgs,

    /// The module this TA assists for.
    #[arg(long = "module", value_name = "CODE")]
    module: Option<String>,

    /// Teaching rating, 0 to 5.
    #[arg(long)]
    rating: Option<String>,

    /// e.g. "Monday, 10:00 - 12:00".
    #[arg(long = "office-hour")]
    office_hour: Option<String>,

    /// Year of study, 1 to 4.
    #[arg(long)]
    year: Option<String>,
  },

  /// Edit the person at INDEX; only the supplied fields change.
  Edit {
    /// One-based index into the listed view.
    index: usize,

    #[command(flatten)]
    fields: EditArgs,
  },

  /// Delete the person at INDEX.
  Delete {
    /// One-based index into the listed view.
    index: usize,
  },

  /// List persons matching the given criterion.
  Find {
    #[command(flatten)]
    criteria: FindArgs,
  },

  /// List everyone.
  List,

  /// Remove every entry from the roster.
  Clear,
}

/// Sparse replacement fields for `edit`; unset flags leave the original
/// values in place. Flags for another role are ignored.
#[derive(Args)]
struct EditArgs {
  #[arg(long)]
  name: Option<String>,

  #[arg(long)]
  phone: Option<String>,

  #[arg(long)]
  email: Option<String>,

  #[arg(long)]
  gender: Option<String>,

  #[arg(long)]
  location: Option<String>,

  #[arg(long)]
  github: Option<String>,

  /// Replaces the whole tag set when given at least once.
  #[arg(long = "tag", value_name = "TAG")]
  tags: Vec<String>,

  /// Replaces a student's module set; the last one given also becomes a
  /// professor's or TA's module code.
  #[arg(long = "module", value_name = "CODE")]
  modules: Vec<String>,

  #[arg(long)]
  rating: Option<String>,

  #[arg(long)]
  specialisation: Option<String>,

  #[arg(long = "office-hour")]
  office_hour: Option<String>,

  #[arg(long)]
  year: Option<String>,
}

/// One criterion per invocation: names, then tags, then modules, in that
/// order of precedence.
#[derive(Args)]
struct FindArgs {
  /// Whole-word name keyword; may be given multiple times.
  #[arg(long = "name", value_name = "KEYWORD")]
  names: Vec<String>,

  /// Tag to look for; may be given multiple times.
  #[arg(long = "tag", value_name = "TAG")]
  tags: Vec<String>,

  /// Module code to look for; may be given multiple times.
  #[arg(long = "module", value_name = "CODE")]
  modules: Vec<String>,

  /// Require the module sets to match exactly instead of intersecting.
  #[arg(long)]
  all: bool,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  /// Default snapshot path, overridden by `--file`.
  file: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let file_cfg: ConfigFile = if let Some(path) = &cli.config {
    let raw = fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flag overrides config file, which overrides the default.
  let snapshot_path = cli
    .file
    .or(file_cfg.file)
    .unwrap_or_else(|| PathBuf::from("rollbook.json"));

  let roster = load_roster(&snapshot_path)?;
  let mut model = Model::new(roster);

  let command = build_command(cli.command)?;
  match command.execute(&mut model) {
    Ok(result) => println!("{}", result.feedback),
    Err(e) => {
      // Every failure surfaces once, verbatim.
      eprintln!("{e}");
      std::process::exit(1);
    }
  }

  fs::write(&snapshot_path, model.roster().to_json()?).with_context(
    || format!("writing snapshot {}", snapshot_path.display()),
  )?;
  Ok(())
}

// ─── Snapshot I/O ─────────────────────────────────────────────────────────────

fn load_roster(path: &Path) -> Result<Roster> {
  if !path.exists() {
    tracing::debug!(path = %path.display(), "no snapshot, starting empty");
    return Ok(Roster::default());
  }
  let bytes = fs::read(path)
    .with_context(|| format!("reading snapshot {}", path.display()))?;
  Roster::from_json(&bytes)
    .with_context(|| format!("decoding snapshot {}", path.display()))
}

// ─── Command construction ─────────────────────────────────────────────────────

/// Map raw flags to validated value objects and a command. This is the only
/// place raw text crosses into the domain.
fn build_command(cmd: Cmd) -> Result<Box<dyn Command>> {
  let command: Box<dyn Command> = match cmd {
    Cmd::Student { person, modules } => {
      let data = person_data(&person)?;
      let module_codes = modules
        .iter()
        .map(|c| ModuleCode::new(c))
        .collect::<rollbook_core::Result<BTreeSet<_>>>()?;
      Box::new(AddCommand::new(Person::student(data, module_codes)))
    }

    Cmd::Prof { person, module, rating, specialisation } => {
      let data = person_data(&person)?;
      let person = Person::professor(
        data,
        module.as_deref().map(ModuleCode::new).transpose()?,
        rating
          .as_deref()
          .map(Rating::new)
          .transpose()?
          .unwrap_or_else(Rating::absent),
        specialisation
          .as_deref()
          .map(Specialisation::new)
          .transpose()?
          .unwrap_or_else(Specialisation::absent),
      )?;
      Box::new(AddCommand::new(person))
    }

    Cmd::Ta { person, module, rating, office_hour, year } => {
      let data = person_data(&person)?;
      let person = Person::teaching_assistant(
        data,
        module.as_deref().map(ModuleCode::new).transpose()?,
        rating
          .as_deref()
          .map(Rating::new)
          .transpose()?
          .unwrap_or_else(Rating::absent),
        office_hour
          .as_deref()
          .map(OfficeHour::new)
          .transpose()?
          .unwrap_or_else(OfficeHour::absent),
        year
          .as_deref()
          .map(Year::new)
          .transpose()?
          .unwrap_or_else(Year::absent),
      )?;
      Box::new(AddCommand::new(person))
    }

    Cmd::Edit { index, fields } => {
      Box::new(EditCommand::new(index, edit_descriptor(&fields)?))
    }

    Cmd::Delete { index } => Box::new(DeleteCommand::new(index)),

    Cmd::Find { criteria } => {
      Box::new(FindCommand::new(find_filter(criteria)))
    }

    Cmd::List => Box::new(ListCommand),

    Cmd::Clear => Box::new(ClearCommand),
  };
  Ok(command)
}

fn person_data(args: &PersonArgs) -> Result<PersonData> {
  Ok(PersonData {
    name:     Name::new(&args.name)?,
    phone:    Phone::new(&args.phone)?,
    email:    Email::new(&args.email)?,
    gender:   Gender::new(&args.gender)?,
    tags:     args
      .tags
      .iter()
      .map(|t| Tag::new(t))
      .collect::<rollbook_core::Result<BTreeSet<_>>>()?,
    location: Location::new(&args.location)?,
    username: args
      .github
      .as_deref()
      .map(GithubUsername::new)
      .transpose()?
      .unwrap_or_else(GithubUsername::absent),
  })
}

fn edit_descriptor(fields: &EditArgs) -> Result<EditDescriptor> {
  let mut descriptor = EditDescriptor::default();
  if let Some(name) = &fields.name {
    descriptor = descriptor.with_name(Name::new(name)?);
  }
  if let Some(phone) = &fields.phone {
    descriptor = descriptor.with_phone(Phone::new(phone)?);
  }
  if let Some(email) = &fields.email {
    descriptor = descriptor.with_email(Email::new(email)?);
  }
  if let Some(gender) = &fields.gender {
    descriptor = descriptor.with_gender(Gender::new(gender)?);
  }
  if let Some(location) = &fields.location {
    descriptor = descriptor.with_location(Location::new(location)?);
  }
  if let Some(github) = &fields.github {
    descriptor = descriptor.with_username(GithubUsername::new(github)?);
  }
  if !fields.tags.is_empty() {
    let tags = fields
      .tags
      .iter()
      .map(|t| Tag::new(t))
      .collect::<rollbook_core::Result<BTreeSet<_>>>()?;
    descriptor = descriptor.with_tags(tags);
  }
  if !fields.modules.is_empty() {
    let codes = fields
      .modules
      .iter()
      .map(|c| ModuleCode::new(c))
      .collect::<rollbook_core::Result<Vec<_>>>()?;
    // The set serves a student edit; the last code serves a professor or
    // TA edit. The target variant picks whichever applies.
    if let Some(last) = codes.last() {
      descriptor = descriptor.with_module_code(last.clone());
    }
    descriptor =
      descriptor.with_module_codes(codes.into_iter().collect());
  }
  if let Some(rating) = &fields.rating {
    descriptor = descriptor.with_rating(Rating::new(rating)?);
  }
  if let Some(spec) = &fields.specialisation {
    descriptor =
      descriptor.with_specialisation(Specialisation::new(spec)?);
  }
  if let Some(office_hour) = &fields.office_hour {
    descriptor = descriptor.with_office_hour(OfficeHour::new(office_hour)?);
  }
  if let Some(year) = &fields.year {
    descriptor = descriptor.with_year(Year::new(year)?);
  }
  Ok(descriptor)
}

fn find_filter(criteria: FindArgs) -> PersonFilter {
  if !criteria.names.is_empty() {
    PersonFilter::NameContainsKeywords(criteria.names)
  } else if !criteria.tags.is_empty() {
    PersonFilter::HasAnyTag(criteria.tags)
  } else if !criteria.modules.is_empty() {
    PersonFilter::ModulesMatch {
      modules:     criteria.modules.into_iter().collect(),
      require_all: criteria.all,
    }
  } else {
    PersonFilter::All
  }
}
