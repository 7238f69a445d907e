//! Interactive catalog editor.
//!
//! Each menu round reloads the catalog from disk, runs one action and saves
//! straight away if the action changed anything. Errors are printed and the
//! menu comes back; only end of input (or a broken terminal) leaves the loop.

use std::io::{BufRead, Write};

use crate::catalog::{Catalog, CatalogStore, Profile, Repository};
use crate::error::{Result, SwatchError};
use crate::utils::parsing::{Selection, parse_selection};

macro_rules! out {
    ($shell:expr) => {
        writeln!($shell.output).map_err(|e| SwatchError::io("<stdout>", e))
    };
    ($shell:expr, $($arg:tt)*) => {
        writeln!($shell.output, $($arg)*).map_err(|e| SwatchError::io("<stdout>", e))
    };
}

/// Menu entries in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddProfile,
    AddColours,
    ListProfiles,
    RemoveProfile,
    RemoveColour,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::AddProfile,
        MenuAction::AddColours,
        MenuAction::ListProfiles,
        MenuAction::RemoveProfile,
        MenuAction::RemoveColour,
        MenuAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddProfile => "Add new profile",
            MenuAction::AddColours => "Add colours to existing profile",
            MenuAction::ListProfiles => "List all profiles",
            MenuAction::RemoveProfile => "Remove a profile",
            MenuAction::RemoveColour => "Remove a colour",
            MenuAction::Exit => "Exit",
        }
    }

    /// Map a menu answer ("1".."6") to an action.
    pub fn from_choice(choice: &str) -> Option<Self> {
        let n: usize = choice.trim().parse().ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }
}

/// Print every profile with its temperatures and colours.
pub fn write_profile_list<W: Write>(catalog: &Catalog, w: &mut W) -> std::io::Result<()> {
    if catalog.is_empty() {
        writeln!(w, "\n  No profiles yet. Add one first!")?;
        return Ok(());
    }

    writeln!(w, "\n  Current profiles:")?;
    writeln!(w, "  {}", "-".repeat(40))?;
    for (i, p) in catalog.profiles.iter().enumerate() {
        let colours = if p.colours.is_empty() {
            "(no colours)".to_string()
        } else {
            p.colours.join(", ")
        };
        writeln!(w, "  {}. {}", i + 1, p.display_name())?;
        writeln!(
            w,
            "     Temps: {}°/{}° | Colours: {}",
            p.temp_nozzle,
            p.temp_bed,
            p.colours.len()
        )?;
        writeln!(w, "     {}", colours)?;
        writeln!(w)?;
    }
    Ok(())
}

/// The interactive editor, generic over its terminal streams.
pub struct Shell<R, W> {
    store: CatalogStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: CatalogStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        out!(self, "\n{}", "=".repeat(40))?;
        out!(self, "   Filament Swatch Manager")?;
        out!(self, "{}", "=".repeat(40))?;

        loop {
            let catalog = match self.store.load() {
                Ok(catalog) => {
                    out!(
                        self,
                        "\n[{} profiles, {} colours total]",
                        catalog.profiles.len(),
                        catalog.colour_count()
                    )?;
                    Some(catalog)
                }
                Err(e) => {
                    out!(self, "\n✗ {}", e)?;
                    None
                }
            };

            out!(self)?;
            for (i, action) in MenuAction::ALL.iter().enumerate() {
                out!(self, "{}. {}", i + 1, action.label())?;
            }

            let Some(choice) = self.ask("\nChoice: ")? else {
                out!(self)?;
                return Ok(());
            };

            let Some(action) = MenuAction::from_choice(&choice) else {
                out!(self, "Invalid choice, try again.")?;
                continue;
            };

            if action == MenuAction::Exit {
                out!(
                    self,
                    "\nBye! Run `swatch-cli jobs` to hand the swatches to your 3D host.\n"
                )?;
                return Ok(());
            }

            let Some(catalog) = catalog else {
                out!(self, "Fix or remove {} first.", self.store.path().display())?;
                continue;
            };

            if let Err(e) = self.dispatch(action, catalog) {
                out!(self, "\n✗ {}", e)?;
            }
        }
    }

    fn dispatch(&mut self, action: MenuAction, catalog: Catalog) -> Result<()> {
        match action {
            MenuAction::AddProfile => self.add_profile(catalog),
            MenuAction::AddColours => self.add_colours(catalog),
            MenuAction::ListProfiles => write_profile_list(&catalog, &mut self.output)
                .map_err(|e| SwatchError::io("<stdout>", e)),
            MenuAction::RemoveProfile => self.remove_profile(catalog),
            MenuAction::RemoveColour => self.remove_colour(catalog),
            MenuAction::Exit => Ok(()),
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add_profile(&mut self, mut catalog: Catalog) -> Result<()> {
        out!(self, "\n--- New Profile ---")?;

        let mut fields = Vec::with_capacity(4);
        for label in ["Manufacturer: ", "Material: ", "Nozzle temp: ", "Bed temp: "] {
            match self.ask(label)? {
                Some(value) if !value.is_empty() => fields.push(value),
                _ => return self.cancelled(),
            }
        }
        let colours = self
            .ask("Colours (comma-separated, or leave empty): ")?
            .unwrap_or_default();

        let (name, count) = {
            let mut repo = Repository::new(&mut catalog);
            let profile =
                repo.add_profile(&fields[0], &fields[1], &fields[2], &fields[3], &colours)?;
            (profile.display_name(), profile.colours.len())
        };
        self.store.save(&catalog)?;

        out!(self, "\n✓ Added \"{}\" with {} colour(s)", name, count)
    }

    fn add_colours(&mut self, mut catalog: Catalog) -> Result<()> {
        let Some(position) = self.select_profile(&catalog, "Add Colours", "Profile number: ")?
        else {
            return Ok(());
        };

        let profile = Repository::new(&mut catalog).get(position)?.clone();
        let current = if profile.colours.is_empty() {
            "(none)".to_string()
        } else {
            profile.colours.join(", ")
        };
        out!(self, "\nCurrent colours: {}", current)?;

        let input = match self.ask("New colours to add (comma-separated): ")? {
            Some(input) if !input.is_empty() => input,
            _ => return self.cancelled(),
        };

        let added = Repository::new(&mut catalog).add_colours(position, &input)?;
        self.store.save(&catalog)?;

        out!(
            self,
            "\n✓ Added {} colour(s) to \"{}\"",
            added,
            profile.display_name()
        )?;
        out!(self, "  Total colours: {}", profile.colours.len() + added)
    }

    fn remove_profile(&mut self, mut catalog: Catalog) -> Result<()> {
        let Some(position) = self.select_profile(
            &catalog,
            "Remove Profile",
            "Profile number (0 to cancel): ",
        )?
        else {
            return Ok(());
        };

        let removed = Repository::new(&mut catalog).remove_profile(position)?;
        self.store.save(&catalog)?;

        out!(self, "\n✓ Removed \"{}\"", removed.display_name())
    }

    fn remove_colour(&mut self, mut catalog: Catalog) -> Result<()> {
        let Some(position) = self.select_profile(&catalog, "Remove Colour", "Profile number: ")?
        else {
            return Ok(());
        };

        let profile = Repository::new(&mut catalog).get(position)?.clone();
        if profile.colours.is_empty() {
            return Err(SwatchError::EmptyProfile(profile.display_name()));
        }

        out!(self, "\nColours in {}:", profile.display_name())?;
        for (i, colour) in profile.colours.iter().enumerate() {
            out!(self, "  {}. {}", i + 1, colour)?;
        }

        let Some(answer) = self.ask("\nColour number to remove (0 to cancel): ")? else {
            return self.cancelled();
        };
        let colour = match parse_selection(&answer)? {
            Selection::Cancel => return self.cancelled(),
            Selection::Index(n) => n,
        };

        let removed = Repository::new(&mut catalog).remove_colour(position, colour)?;
        self.store.save(&catalog)?;

        out!(
            self,
            "\n✓ Removed \"{}\" from \"{}\"",
            removed,
            profile.display_name()
        )
    }

    // =========================================================================
    // Prompts
    // =========================================================================

    /// Show the numbered profile list and read a selection.
    ///
    /// `None` means there was nothing to pick or the user cancelled.
    fn select_profile(
        &mut self,
        catalog: &Catalog,
        heading: &str,
        prompt: &str,
    ) -> Result<Option<usize>> {
        if catalog.is_empty() {
            out!(self, "\n  No profiles yet. Add one first!")?;
            return Ok(None);
        }

        out!(self, "\n--- {} ---", heading)?;
        out!(self, "Select profile:")?;
        for (i, p) in catalog.profiles.iter().enumerate() {
            out!(self, "  {}", summary_line(i + 1, p))?;
        }

        let Some(answer) = self.ask(&format!("\n{}", prompt))? else {
            self.cancelled()?;
            return Ok(None);
        };

        match parse_selection(&answer)? {
            Selection::Cancel => {
                self.cancelled()?;
                Ok(None)
            }
            Selection::Index(n) => Ok(Some(n)),
        }
    }

    /// Print `label`, read one line. `None` at end of input.
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label).map_err(|e| SwatchError::io("<stdout>", e))?;
        self.output
            .flush()
            .map_err(|e| SwatchError::io("<stdout>", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| SwatchError::io("<stdin>", e))?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn cancelled(&mut self) -> Result<()> {
        out!(self, "Cancelled.")
    }
}

fn summary_line(position: usize, profile: &Profile) -> String {
    format!(
        "{}. {} ({} colours)",
        position,
        profile.display_name(),
        profile.colours.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG_FILE;

    struct Session {
        _dir: tempfile::TempDir,
        store: CatalogStore,
    }

    impl Session {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let store = CatalogStore::new(dir.path().join(CATALOG_FILE));
            Self { _dir: dir, store }
        }

        fn seeded() -> Self {
            let session = Self::new();
            let mut catalog = Catalog::default();
            let mut repo = Repository::new(&mut catalog);
            repo.add_profile("Bambu Lab", "PLA", "220", "60", "White, Black").unwrap();
            repo.add_profile("Prusament", "PETG", "250", "85", "").unwrap();
            session.store.save(&catalog).unwrap();
            session
        }

        /// Feed `input` to a fresh shell and return everything it printed.
        fn run(&self, input: &str) -> String {
            let mut out = Vec::new();
            Shell::new(self.store.clone(), input.as_bytes(), &mut out)
                .run()
                .unwrap();
            String::from_utf8(out).unwrap()
        }

        fn catalog(&self) -> Catalog {
            self.store.load().unwrap()
        }

        fn raw(&self) -> Option<String> {
            std::fs::read_to_string(self.store.path()).ok()
        }
    }

    #[test]
    fn test_menu_choice_mapping() {
        assert_eq!(MenuAction::from_choice("1"), Some(MenuAction::AddProfile));
        assert_eq!(MenuAction::from_choice(" 6 "), Some(MenuAction::Exit));
        assert_eq!(MenuAction::from_choice("0"), None);
        assert_eq!(MenuAction::from_choice("7"), None);
        assert_eq!(MenuAction::from_choice("exit"), None);
    }

    #[test]
    fn test_exit_and_eof() {
        let session = Session::new();
        let out = session.run("6\n");
        assert!(out.contains("Filament Swatch Manager"));
        assert!(out.contains("[0 profiles, 0 colours total]"));
        assert!(out.contains("Bye!"));

        // EOF with no exit still returns cleanly and writes nothing.
        session.run("");
        assert!(session.raw().is_none());
    }

    #[test]
    fn test_add_profile() {
        let session = Session::new();
        let out = session.run("1\nBambu Lab\nPLA Basic\n220\n60\n Red ,  ,Blue,\n6\n");

        assert!(out.contains("✓ Added \"Bambu Lab PLA Basic\" with 2 colour(s)"));
        let catalog = session.catalog();
        assert_eq!(catalog.profiles.len(), 1);
        assert_eq!(catalog.profiles[0].colours, vec!["Red", "Blue"]);
        assert_eq!(catalog.profiles[0].id, 1);
    }

    #[test]
    fn test_add_profile_blank_field_cancels() {
        let session = Session::new();
        let out = session.run("1\nBambu Lab\n\n6\n");

        assert!(out.contains("Cancelled."));
        assert!(session.raw().is_none());
    }

    #[test]
    fn test_add_colours() {
        let session = Session::seeded();
        let out = session.run("2\n2\nGalaxy Black, Orange\n6\n");

        assert!(out.contains("Current colours: (none)"));
        assert!(out.contains("✓ Added 2 colour(s) to \"Prusament PETG\""));
        assert!(out.contains("Total colours: 2"));
        assert_eq!(
            session.catalog().profiles[1].colours,
            vec!["Galaxy Black", "Orange"]
        );
    }

    #[test]
    fn test_add_colours_invalid_selection() {
        let session = Session::seeded();
        let before = session.raw();

        let out = session.run("2\n9\n2\nabc\n6\n");
        assert!(out.contains("Invalid profile number 9"));
        assert!(out.contains("Invalid input"));
        assert_eq!(session.raw(), before);
    }

    #[test]
    fn test_list_profiles() {
        let session = Session::seeded();
        let out = session.run("3\n6\n");

        assert!(out.contains("[2 profiles, 2 colours total]"));
        assert!(out.contains("1. Bambu Lab PLA"));
        assert!(out.contains("Temps: 220°/60° | Colours: 2"));
        assert!(out.contains("White, Black"));
        assert!(out.contains("(no colours)"));
    }

    #[test]
    fn test_remove_profile() {
        let session = Session::seeded();
        let out = session.run("4\n1\n6\n");

        assert!(out.contains("✓ Removed \"Bambu Lab PLA\""));
        let catalog = session.catalog();
        assert_eq!(catalog.profiles.len(), 1);
        assert_eq!(catalog.profiles[0].display_name(), "Prusament PETG");
    }

    #[test]
    fn test_remove_profile_cancel() {
        let session = Session::seeded();
        let before = session.raw();

        let out = session.run("4\n0\n6\n");
        assert!(out.contains("Cancelled."));
        assert_eq!(session.raw(), before);
    }

    #[test]
    fn test_remove_colour() {
        let session = Session::seeded();
        let out = session.run("5\n1\n2\n6\n");

        assert!(out.contains("✓ Removed \"Black\" from \"Bambu Lab PLA\""));
        assert_eq!(session.catalog().profiles[0].colours, vec!["White"]);
    }

    #[test]
    fn test_remove_colour_cancel_is_noop() {
        let session = Session::seeded();
        let before = session.raw();

        let out = session.run("5\n1\n0\n6\n");
        assert!(out.contains("Cancelled."));
        assert_eq!(session.raw(), before);
    }

    #[test]
    fn test_remove_colour_from_empty_profile() {
        let session = Session::seeded();
        let out = session.run("5\n2\n6\n");
        assert!(out.contains("No colours in profile \"Prusament PETG\""));
    }

    #[test]
    fn test_empty_catalog_selection() {
        let session = Session::new();
        let out = session.run("4\n5\n2\n6\n");
        assert_eq!(out.matches("No profiles yet. Add one first!").count(), 3);
    }

    #[test]
    fn test_invalid_menu_choice() {
        let session = Session::new();
        let out = session.run("9\nx\n6\n");
        assert_eq!(out.matches("Invalid choice, try again.").count(), 2);
    }

    #[test]
    fn test_malformed_catalog_keeps_loop_alive() {
        let session = Session::new();
        std::fs::write(session.store.path(), "{ broken").unwrap();

        let out = session.run("3\n6\n");
        assert!(out.contains("malformed"));
        assert!(out.contains("Fix or remove"));
        assert!(out.contains("Bye!"));
        assert_eq!(session.raw().as_deref(), Some("{ broken"));
    }
}
