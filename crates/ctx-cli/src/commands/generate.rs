use std::path::{Path, PathBuf};

use anyhow::Context;
use ctx_config::CtxConfig;
use ctx_core::{Setup, naming};
use ctx_db::{DatabaseSource, SchemaDump, SchemaSource, TableCatalog};
use ctx_files::{BundleReport, BundleWriter, DirectoryRules, FileCatalog, FileLister};
use ctx_store::SetupStore;

use crate::cli::GlobalFlags;
use crate::progress::Progress;
use crate::prompt::{Prompter, TerminalPrompter};
use crate::session;

/// Everything one run reads from and writes to.
pub struct Generate<'a, S, L> {
    pub tables: TableCatalog<'a, S>,
    pub files: FileCatalog<L>,
    pub store: SetupStore,
    pub writer: BundleWriter,
    pub bundle_path: PathBuf,
    /// How the bundle and store are named in console messages.
    pub bundle_label: String,
    pub store_label: String,
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// No tables were chosen; nothing was written.
    NoTables,
    Generated {
        setup: Setup,
        report: BundleReport,
    },
}

/// Connect to the project's database and run the interactive flow.
pub async fn handle(
    flags: &GlobalFlags,
    project_root: &Path,
    config: &CtxConfig,
) -> anyhow::Result<()> {
    let bundle_label = flags
        .output
        .clone()
        .unwrap_or_else(|| config.output.bundle_file.clone());
    let store_label = flags
        .store
        .clone()
        .unwrap_or_else(|| config.output.store_file.clone());

    let source = DatabaseSource::connect(&config.database, project_root)
        .await
        .context("failed to connect to the project database")?;

    let generate = Generate {
        tables: TableCatalog::new(&source, config.tables.excluded.clone()),
        files: FileCatalog::for_project(project_root, DirectoryRules::from_config(&config.files)),
        store: SetupStore::new(project_root.join(&store_label)),
        writer: BundleWriter::new(project_root, config.output.report_threshold_bytes),
        bundle_path: project_root.join(&bundle_label),
        bundle_label,
        store_label,
    };

    let mut prompter = TerminalPrompter::new(flags.quiet);
    match generate.run(&mut prompter).await? {
        Outcome::NoTables => tracing::debug!("no tables selected; nothing written"),
        Outcome::Generated { setup, report } => tracing::debug!(
            setup = %setup.name,
            appended = report.appended.len(),
            missing = report.missing.len(),
            "bundle generated"
        ),
    }
    Ok(())
}

impl<S: SchemaSource, L: FileLister> Generate<'_, S, L> {
    /// Choose a setup, tables and files, then write the bundle and the setup.
    ///
    /// # Errors
    ///
    /// Database, filesystem and prompt failures are fatal; missing tables and
    /// files are reported and skipped.
    pub async fn run<P: Prompter>(&self, prompter: &mut P) -> anyhow::Result<Outcome> {
        let setups = self.store.load();
        let chosen = session::choose_setup(prompter, &setups)?;
        let (default_tables, default_files) = chosen
            .map(|setup| (setup.tables, setup.files))
            .unwrap_or_default();

        let selectable = self
            .tables
            .selectable_tables()
            .await
            .context("failed to list database tables")?;
        let tables = session::choose_tables(prompter, &selectable, &default_tables)?;
        if tables.is_empty() {
            prompter.info("No tables selected.");
            return Ok(Outcome::NoTables);
        }

        let mut dump = SchemaDump::default();
        for table in &tables {
            prompter.info(&format!("Processing table: {table}"));
            let statement = self
                .tables
                .create_statement(table)
                .await
                .with_context(|| format!("failed to dump the schema of {table}"))?;
            if statement.is_none() {
                prompter.warn(&format!("No CREATE TABLE statement found for table: {table}"));
            }
            dump.record(table, statement);
        }

        let progress = Progress::spinner("Searching for files in the project");
        let candidates = match self.files.list_candidate_files() {
            Ok(candidates) => {
                progress.finish_clear();
                candidates
            }
            Err(error) => {
                progress.finish_err("file search failed");
                return Err(error).context("failed to list project files");
            }
        };

        let mut selection = session::seed_selection(prompter, candidates, &default_files);
        session::choose_files(prompter, &mut selection)?;
        let files = selection.into_selected();

        let report = self
            .writer
            .write(&self.bundle_path, &dump.sql, &files)
            .context("failed to write the bundle")?;
        for missing in &report.missing {
            prompter.warn(&format!("File not found: {missing}"));
        }
        for appended in report.appended.iter().filter(|file| file.reported) {
            prompter.info(&format!("Appended file: {} {}", appended.size, appended.path));
        }

        let setup = Setup::new(naming::setup_name(&tables, &files), tables, files);
        self.store
            .save(setup.clone(), setups)
            .context("failed to save the setup")?;

        prompter.success(&format!(
            "Setup '{}' saved successfully in {}.",
            setup.name, self.store_label
        ));
        prompter.success(&format!(
            "{} has been generated successfully.",
            self.bundle_label
        ));

        Ok(Outcome::Generated { setup, report })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use ctx_core::defaults::{EXCLUDED_TABLES, NEW_SETUP_LABEL, to_owned_list};
    use ctx_db::DatabaseError;
    use ctx_files::FileError;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::prompt::scripted::{Answer, ScriptedPrompter};

    struct FakeDatabase;

    impl SchemaSource for FakeDatabase {
        async fn list_tables(&self) -> Result<Vec<String>, DatabaseError> {
            Ok(to_owned_list(&["migrations", "orders", "users", "views_only"]))
        }

        async fn show_create_table(&self, table: &str) -> Result<Option<String>, DatabaseError> {
            Ok(match table {
                "users" => Some(
                    "CREATE TABLE `users` (\n  `id` bigint NOT NULL AUTO_INCREMENT -- pk\n) ENGINE=InnoDB AUTO_INCREMENT=42 DEFAULT CHARSET=utf8mb4".into(),
                ),
                "orders" => Some("CREATE TABLE `orders` (`id` bigint);".into()),
                _ => None,
            })
        }
    }

    struct FixedFiles(Vec<&'static str>);

    impl FileLister for FixedFiles {
        fn list_files(&self) -> Result<Vec<String>, FileError> {
            Ok(to_owned_list(&self.0))
        }
    }

    fn project() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (path, content) in [
            ("app/Models/User.php", "<?php class User {}"),
            ("app/Models/Order.php", "<?php class Order {}"),
            ("routes/web.php", "<?php"),
        ] {
            let path = dir.path().join(path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        dir
    }

    fn generate<'a>(root: &Path, db: &'a FakeDatabase) -> Generate<'a, FakeDatabase, FixedFiles> {
        Generate {
            tables: TableCatalog::new(db, to_owned_list(EXCLUDED_TABLES)),
            files: FileCatalog::new(
                FixedFiles(vec![
                    "app/Models/User.php",
                    "app/Models/Order.php",
                    "routes/web.php",
                    "vendor/autoload.php",
                ]),
                DirectoryRules::default(),
            ),
            store: SetupStore::new(root.join(".suggests.txt")),
            writer: BundleWriter::new(root, 13_000).with_postscript("PS"),
            bundle_path: root.join("gpt_setup.txt"),
            bundle_label: "gpt_setup.txt".into(),
            store_label: ".suggests.txt".into(),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn full_run_writes_bundle_and_setup() {
        let dir = project();
        let db = FakeDatabase;
        let generate = generate(dir.path(), &db);
        let mut prompter = ScriptedPrompter::new([
            Answer::Select(NEW_SETUP_LABEL.into()),
            Answer::MultiSelect(strings(&["users"])),
            Answer::Suggest("app/Models/User.php".into()),
            Answer::Suggest(String::new()),
        ]);

        let outcome = generate.run(&mut prompter).await.unwrap();

        let Outcome::Generated { setup, report } = outcome else {
            panic!("expected a generated bundle");
        };
        assert_eq!(setup.name, "users_User.php");
        assert_eq!(report.appended.len(), 1);

        let bundle = fs::read_to_string(dir.path().join("gpt_setup.txt")).unwrap();
        assert_eq!(
            bundle,
            "CREATE TABLE `users` (\n  `id` bigint NOT NULL AUTO_INCREMENT ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;\n\n\
             \nFile app/Models/User.php\n<?php class User {}\nPS"
        );

        assert_eq!(generate.store.load(), vec![setup]);
        assert!(prompter.infos().contains(&"Appended file: 19 app/Models/User.php"));
        assert!(
            prompter
                .infos()
                .contains(&"Setup 'users_User.php' saved successfully in .suggests.txt.")
        );
        assert_eq!(
            prompter.suggest_candidates[0],
            strings(&["app/Models/User.php", "app/Models/Order.php", "routes/web.php"])
        );
    }

    #[tokio::test]
    async fn empty_table_selection_writes_nothing() {
        let dir = project();
        let db = FakeDatabase;
        let generate = generate(dir.path(), &db);
        let mut prompter = ScriptedPrompter::new([
            Answer::Select(NEW_SETUP_LABEL.into()),
            Answer::MultiSelect(vec![]),
        ]);

        let outcome = generate.run(&mut prompter).await.unwrap();

        assert!(matches!(outcome, Outcome::NoTables));
        assert!(prompter.suggest_candidates.is_empty());
        assert_eq!(prompter.infos(), vec!["No tables selected."]);
        assert!(!dir.path().join("gpt_setup.txt").exists());
        assert!(!dir.path().join(".suggests.txt").exists());
    }

    #[tokio::test]
    async fn stored_setup_supplies_defaults() {
        let dir = project();
        let db = FakeDatabase;
        let generate = generate(dir.path(), &db);
        generate
            .store
            .save(
                Setup::new("mine", strings(&["users"]), strings(&["routes/web.php"])),
                vec![Setup::new("other", strings(&["orders"]), vec![])],
            )
            .unwrap();

        let mut prompter = ScriptedPrompter::new([
            Answer::Select("mine".into()),
            Answer::MultiSelect(strings(&["users", "orders"])),
            Answer::Suggest("app/Models/Order.php".into()),
            Answer::Suggest(String::new()),
        ]);

        let Outcome::Generated { setup, .. } = generate.run(&mut prompter).await.unwrap() else {
            panic!("expected a generated bundle");
        };

        assert_eq!(prompter.multiselect_defaults[0], strings(&["users"]));
        assert_eq!(
            prompter.suggest_candidates[0],
            strings(&["app/Models/User.php", "app/Models/Order.php"])
        );
        assert_eq!(setup.name, "users, orders_web.php, Order.php");
        assert_eq!(setup.files, strings(&["routes/web.php", "app/Models/Order.php"]));

        let names: Vec<String> = generate.store.load().into_iter().map(|s| s.name).collect();
        assert_eq!(names, strings(&["other", "mine", "users, orders_web.php, Order.php"]));
    }

    #[tokio::test]
    async fn tables_without_statement_are_warned_and_skipped() {
        let dir = project();
        let db = FakeDatabase;
        let generate = generate(dir.path(), &db);
        let mut prompter = ScriptedPrompter::new([
            Answer::Select(NEW_SETUP_LABEL.into()),
            Answer::MultiSelect(strings(&["views_only", "orders"])),
            Answer::Suggest(String::new()),
        ]);

        generate.run(&mut prompter).await.unwrap();

        assert_eq!(
            prompter.warnings(),
            vec!["No CREATE TABLE statement found for table: views_only"]
        );
        let processed: Vec<&str> = prompter
            .infos()
            .into_iter()
            .filter(|line| line.starts_with("Processing table: "))
            .collect();
        assert_eq!(
            processed,
            vec!["Processing table: views_only", "Processing table: orders"]
        );
        let bundle = fs::read_to_string(dir.path().join("gpt_setup.txt")).unwrap();
        assert!(bundle.starts_with("CREATE TABLE `orders` (`id` bigint);\n\n\nPS"));
    }

    #[tokio::test]
    async fn deleted_file_is_warned_at_write_time() {
        let dir = project();
        let db = FakeDatabase;
        let generate = generate(dir.path(), &db);
        let mut prompter = ScriptedPrompter::new([
            Answer::Select(NEW_SETUP_LABEL.into()),
            Answer::MultiSelect(strings(&["orders"])),
            Answer::Suggest("routes/web.php".into()),
            Answer::Suggest(String::new()),
        ]);
        fs::remove_file(dir.path().join("routes/web.php")).unwrap();

        let Outcome::Generated { setup, report } = generate.run(&mut prompter).await.unwrap()
        else {
            panic!("expected a generated bundle");
        };

        assert_eq!(report.missing, strings(&["routes/web.php"]));
        assert!(prompter.warnings().contains(&"File not found: routes/web.php"));
        assert_eq!(setup.files, strings(&["routes/web.php"]));
    }
}
