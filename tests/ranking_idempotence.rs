use quickcheck::quickcheck;
use bankselect::{DegreeTable, MatchEdge, MatchTables, MatchValue, Tag};

fn build(edges: &[(u8, u8, u8)]) -> MatchTables {
    let mut tables = MatchTables::new();
    for &(a, b, v) in edges {
        tables.insert(&MatchEdge {
            bank: Tag::new(format!("p{}", a % 10)),
            test: Tag::new(format!("p{}", b % 10)),
            value: MatchValue::new(v as f64 / 255.0),
        });
    }
    tables.finish();
    tables
}

quickcheck! {
    fn ranking_twice_is_identical(edges: Vec<(u8, u8, u8)>, threshold: u8) -> bool {
        let tables = build(&edges);
        let tau = threshold as f64 / 255.0;
        DegreeTable::rank(&tables.by_test, tau) == DegreeTable::rank(&tables.by_test, tau)
    }
}

quickcheck! {
    fn g_value_matches_neighbor_list(edges: Vec<(u8, u8, u8)>) -> bool {
        let tables = build(&edges);
        DegreeTable::rank(&tables.by_test, 0.5)
            .iter()
            .all(|d| d.g_value == d.neighbors.len() && !d.neighbors.contains(&d.point))
    }
}
