//! Snapshot tests using insta
//!
//! Whole queries are formatted and compared against inline snapshots. Each
//! output line is prefixed with `|` so leading blank lines and indentation
//! stay visible.

use insta::assert_snapshot;
use queryfmt::format;

/// Format a SQL string and mark every output line
fn render(input: &str) -> String {
    format(input)
        .split('\n')
        .map(|line| format!("|{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// SELECT Snapshots
// =============================================================================

#[test]
fn snapshot_simple_select() {
    assert_snapshot!(render("select id, name from users"), @r"
    |
    |SELECT id, name
    |FROM users
    ");
}

#[test]
fn snapshot_report_query() {
    assert_snapshot!(render(
        "select u.name, count(o.id) as orders from users u inner join orders o on u.id = o.user_id \
         where u.active = 1 and o.total > 10 group by u.name order by orders desc limit 5"
    ), @r"
    |
    |SELECT u.name, count(o.id) AS orders
    |FROM users u
    |INNER JOIN orders o
    |ON u.id = o.user_id
    |WHERE u.active = 1
    |AND o.total > 10
    |GROUP BY u.name
    |ORDER BY orders desc
    |LIMIT 5
    ");
}

#[test]
fn snapshot_case_expression() {
    assert_snapshot!(render(
        "select id, case when status = 'A' then 'active' when status = 'P' then 'pending' else 'other' end as label from accounts"
    ), @r"
    |
    |SELECT id,
    |CASE
    |  WHEN status = 'A' then 'active'
    |  WHEN status = 'P' then 'pending'
    |  ELSE 'other'
    |END AS label
    |FROM accounts
    ");
}

// =============================================================================
// DML Snapshots
// =============================================================================

#[test]
fn snapshot_insert() {
    assert_snapshot!(render("insert into users ( id , name ) values ( 1 , 'ann' )"), @"|INSERT INTO users (id, name) VALUES (1, 'ann')");
}

#[test]
fn snapshot_update() {
    assert_snapshot!(render("update users set name = 'bob', active = 0 where id = 7 and active = 1"), @r"
    |UPDATE users SET name = 'bob', active = 0
    |WHERE id = 7
    |AND active = 1
    ");
}
