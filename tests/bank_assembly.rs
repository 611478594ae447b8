use std::fs;
use std::path::{Path, PathBuf};

use bankselect::{run_selection, BankError, RecordTable, SelectionConfig, Tag, TieBreak};

const PROPOSALS: &str = "simulation_id,mass1,mass2\nA,1.0,1.1\nB,2.0,2.1\nC,3.0,3.1\n";
const OLD_BANK: &str = "simulation_id,mass1,mass2\nX,9.0,9.1\n";

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("proposals.csv"), PROPOSALS).unwrap();
        fs::write(dir.path().join("bank_4.csv"), OLD_BANK).unwrap();
        fs::create_dir(dir.path().join("matches")).unwrap();
        Fixture { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn add_matches(&self, name: &str, body: &str) {
        fs::write(self.path("matches").join(name), body).unwrap();
    }

    fn config(&self) -> SelectionConfig {
        SelectionConfig {
            proposal_file: Some(self.path("proposals.csv")),
            old_bank_file: Some(self.path("bank_4.csv")),
            new_bank_file: Some(self.path("bank_5.csv")),
            match_file_glob: Some(format!("{}/match_*.dat", self.path("matches").display())),
            elimination_dir: self.path("eliminated"),
            summary_file: self.path("SummaryStatistics.dat"),
            ..SelectionConfig::default()
        }
    }
}

fn tags_in(path: &Path) -> Vec<Tag> {
    RecordTable::read(path).unwrap().tags().collect()
}

#[test]
fn scenario_appends_one_survivor_and_the_unclustered_point() {
    let fx = Fixture::new();
    fx.add_matches("match_0.dat", "A B 0 0.99\nA C 0 0.5\nB C 0 0.3\n");
    let report = run_selection(&fx.config()).unwrap();

    assert_eq!(report.bank_index, 4);
    assert_eq!(report.selection.survivors, vec![Tag::from("A")]);
    assert_eq!(report.counts.added(), 2);
    assert_eq!(
        tags_in(&fx.path("bank_5.csv")),
        vec![Tag::from("X"), Tag::from("A"), Tag::from("C")]
    );
    assert_eq!(
        fs::read_to_string(fx.path("SummaryStatistics.dat")).unwrap(),
        "4\t2\t3\n"
    );
    assert!(report.process_file.exists());
}

#[test]
fn no_match_files_pass_every_proposal_through() {
    let fx = Fixture::new();
    let report = run_selection(&fx.config()).unwrap();
    assert_eq!(report.match_files, 0);
    assert!(report.selection.survivors.is_empty());
    assert_eq!(
        tags_in(&fx.path("bank_5.csv")),
        vec![Tag::from("X"), Tag::from("A"), Tag::from("B"), Tag::from("C")]
    );
}

#[test]
fn output_rows_keep_old_bank_columns() {
    let fx = Fixture::new();
    fs::write(
        fx.path("proposals.csv"),
        "mass2,simulation_id,spin,mass1\n2.1,B,0.3,2.0\n",
    )
    .unwrap();
    fx.add_matches("match_0.dat", "B B 0 1.0\n");
    run_selection(&fx.config()).unwrap();
    let written = fs::read_to_string(fx.path("bank_5.csv")).unwrap();
    assert_eq!(written, "simulation_id,mass1,mass2\nX,9.0,9.1\nB,2.0,2.1\n");
}

#[test]
fn selected_tag_without_proposal_row_aborts() {
    let fx = Fixture::new();
    fx.add_matches("match_0.dat", "Q R 0 0.99\n");
    match run_selection(&fx.config()) {
        Err(BankError::InconsistentReference(tag)) => assert_eq!(tag, Tag::from("Q")),
        other => panic!("unexpected {other:?}"),
    }
    assert!(!fx.path("bank_5.csv").exists());
}

#[test]
fn missing_inputs_are_reported() {
    let fx = Fixture::new();
    let cfg = SelectionConfig {
        proposal_file: None,
        ..fx.config()
    };
    assert!(matches!(run_selection(&cfg), Err(BankError::MissingInput(_))));

    let cfg = SelectionConfig {
        old_bank_file: Some(fx.path("bank_missing_1.csv")),
        ..fx.config()
    };
    assert!(matches!(run_selection(&cfg), Err(BankError::FileNotFound(_))));
}

#[test]
fn unsupported_table_is_rejected() {
    let fx = Fixture::new();
    fs::write(fx.path("bank_4.csv"), "id,mass1\nX,1\n").unwrap();
    assert!(matches!(
        run_selection(&fx.config()),
        Err(BankError::UnsupportedFormat { .. })
    ));
}

#[test]
fn tie_break_option_reaches_the_selector() {
    let fx = Fixture::new();
    // Keys in the test-keyed map run B, A, D, C, all with G = 1.
    fx.add_matches("match_0.dat", "A B 0 0.99\nC D 0 0.99\n");
    let last = run_selection(&fx.config()).unwrap();
    let smallest = run_selection(&SelectionConfig {
        tie_break: TieBreak::SmallestTag,
        ..fx.config()
    })
    .unwrap();
    assert_eq!(last.selection.survivors, vec![Tag::from("C"), Tag::from("A")]);
    assert_eq!(smallest.selection.survivors, vec![Tag::from("A"), Tag::from("C")]);
    assert_eq!(
        tags_in(&fx.path("bank_5.csv")),
        vec![Tag::from("X"), Tag::from("A"), Tag::from("C")]
    );
    assert_eq!(
        fs::read_to_string(fx.path("SummaryStatistics.dat")).unwrap(),
        "4\t2\t3\n4\t2\t3\n"
    );
}
