use cliquestats::models::{CliqueCount, GraphSummary};
use cliquestats::{ParsedReport, parse_report};

fn cc(size: u64, count: u64) -> CliqueCount {
    CliqueCount { size, count }
}

const ELS_OUTPUT: &str = "\
Starting program execution...
Reading file: data/Email-Enron.txt...
Edges: 183831 | Nodes: 36692
Adjacency list conversion completed.
Degeneracy ordering computed.
Graph degeneracy: 43
Starting Run 1...
Run 1 execution time: 120 ms
Starting Run 2...
Run 2 execution time: 130 ms

--- Execution Time Table ---
---------------------------------
| Run # | Execution Time (ms)    |
---------------------------------
|     1  |         120 ms   |
|     2  |         130 ms   |
---------------------------------
| Avg   |         125 ms   |
---------------------------------
| Clique Size | Number of Cliques       |
----------------------------------------
|           2 |                14,070 |
|           3 |                 7,073 |
|           4 |                13,145 |
|          20 |                     4 |
----------------------------------------

Total Number of Maximal Cliques: 34292

Program execution finished.
";

const TOMITA_OUTPUT: &str = "\
Reading file...
Maximal Clique (Size 3): 1 2 3

===== Clique Size Distribution =====
+------------+-----------------+
| Clique Size | Number of Cliques |
+------------+-----------------+
|          2 |           8,655 |
|          3 |          13,718 |
|         17 |              23 |
+------------+-----------------+

Total Number of Cliques: 22396
Largest Clique Size: 17
Execution Time: 2841 ms
";

const CHIBA_OUTPUT: &str = "\
Initialization complete, starting clique exploration
+--------------------------+---------------------------+
|         Metric           |          Value            |
+--------------------------+---------------------------+
| Maximum clique size      |                        12 |
| Total maximal cliques    |                      1,024 |
| Execution Time (seconds) |                      3.25 |
+--------------------------+---------------------------+

+---------------+---------+
| Clique Size   | Count   |
+---------------+---------+
|             2 |     900 |
|            12 |     124 |
+---------------+---------+
";

#[test]
fn header_table_example() {
    let text = "| Clique Size | Number of Cliques |\n-----\n| 3 | 1,250 |\n| 5 | 40 |\n-----\n";
    let r = parse_report(text, "reports/ELS_WikiVote.txt");
    assert_eq!(r.test_case, "WikiVote");
    assert_eq!(r.distribution, vec![cc(3, 1250), cc(5, 40)]);
    assert_eq!(r.total_cliques, 1290);
    assert_eq!(r.largest_clique_size, 5);
}

#[test]
fn summary_only_report() {
    let text = "Total number of maximal cliques: 99\nLargest clique size: 7\n";
    let r = parse_report(text, "Tomita_skitter.txt");
    assert_eq!(r.test_case, "Skitter");
    assert!(r.distribution.is_empty());
    assert_eq!(r.total_cliques, 99);
    assert_eq!(r.largest_clique_size, 7);
}

#[test]
fn full_els_output() {
    let r = parse_report(ELS_OUTPUT, "public/reports/ELS_Email-Enron.txt");
    assert_eq!(r.test_case, "Email-Enron");
    assert_eq!(r.distribution, vec![cc(2, 14070), cc(3, 7073), cc(4, 13145), cc(20, 4)]);
    assert_eq!(r.total_cliques, 34292);
    assert_eq!(r.largest_clique_size, 20);
    assert_eq!(r.graph, Some(GraphSummary { nodes: 36692, edges: 183831 }));

    let timing = r.timing.expect("ELS imprime la tabla de tiempos");
    assert_eq!(timing.runs_ms, vec![120.0, 130.0]);
    assert_eq!(timing.average_ms, Some(125.0));
}

#[test]
fn full_tomita_output() {
    let r = parse_report(TOMITA_OUTPUT, "C:\\runs\\Tomita_WikiVote.txt");
    assert_eq!(r.test_case, "WikiVote");
    assert_eq!(r.distribution, vec![cc(2, 8655), cc(3, 13718), cc(17, 23)]);
    // el total declarado manda aunque no coincida con la suma
    assert_eq!(r.total_cliques, 22396);
    assert_eq!(r.largest_clique_size, 17);
    assert_eq!(r.timing.and_then(|t| t.average_ms), Some(2841.0));
    assert!(r.graph.is_none());
}

#[test]
fn full_chiba_output() {
    let r = parse_report(CHIBA_OUTPUT, "chiba_output.txt");
    assert_eq!(r.test_case, "Unknown");
    assert_eq!(r.distribution, vec![cc(2, 900), cc(12, 124)]);
    assert_eq!(r.total_cliques, 1024);
    assert_eq!(r.largest_clique_size, 12);
    assert_eq!(r.timing.and_then(|t| t.average_ms), Some(3250.0));
}

#[test]
fn unsorted_and_duplicated_rows() {
    let text = "| Clique Size | Number of Cliques |\n---\n| 5 | 2 |\n| 3 | 9 |\n| 5 | 4 |\n";
    let r = parse_report(text, "x.txt");
    assert_eq!(r.distribution, vec![cc(3, 9), cc(5, 4)]);
    assert_eq!(r.total_cliques, 13);
    assert_eq!(r.largest_clique_size, 5);
}

#[test]
fn test_case_only_looks_at_file_name() {
    let r = parse_report("", "WikiVote/runs/other.txt");
    assert_eq!(r.test_case, "Unknown");
    let r = parse_report("", "Skitter.txt");
    assert_eq!(r.test_case, "Unknown", "las reglas distinguen mayúsculas");
}

#[test]
fn garbage_input_never_fails() {
    let text = "| Clique Size | Number of Cliques |\n| a | b |\n\u{0}\u{1}\n\
                ===== Clique Size Distribution =====\n";
    let r = parse_report(text, "");
    assert_eq!(r, ParsedReport::empty());
}

#[test]
fn parsing_is_idempotent() {
    let a = parse_report(ELS_OUTPUT, "ELS_Email-Enron.txt");
    let b = parse_report(ELS_OUTPUT, "ELS_Email-Enron.txt");
    assert_eq!(a, b);
}

#[test]
fn serializes_with_dashboard_field_names() {
    let text = "| Clique Size | Number of Cliques |\n---\n| 3 | 10 |\n";
    let r = parse_report(text, "Email-Enron.txt");
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["testCase"], "Email-Enron");
    assert_eq!(json["totalCliques"], 10);
    assert_eq!(json["largestCliqueSize"], 3);
    assert_eq!(json["distribution"][0]["count"], 10);
    assert!(json.get("timing").is_none());
}

#[test]
fn numbers_inside_the_phrase_are_not_the_total() {
    let text = "Total number of maximal cliques (size >= 3): 99\n";
    assert_eq!(parse_report(text, "x.txt").total_cliques, 99);
}

#[test]
fn empty_tomita_table_does_not_borrow_later_rows() {
    let text = "\
===== Clique Size Distribution =====
+------------+-----------------+
| Clique Size | Number of Cliques |
+------------+-----------------+
+------------+-----------------+

Total Number of Cliques: 0

+---------------+---------+
| Clique Size   | Count   |
+---------------+---------+
|             4 |       7 |
+---------------+---------+
";
    let r = parse_report(text, "Tomita_WikiVote.txt");
    assert!(r.distribution.is_empty());
    assert_eq!(r.total_cliques, 0);
    assert_eq!(r.largest_clique_size, 0);
}
