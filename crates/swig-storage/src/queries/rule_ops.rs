//! Insert, update, get, delete, and renumbering for rules.

use rusqlite::{params, Connection, OptionalExtension, Row};

use swig_core::models::{Category, DrinkLevel, Rule};
use swig_core::{SwigError, SwigResult};

use super::{corrupt, format_timestamp, parse_timestamp};
use crate::to_storage_err;

const RULE_COLUMNS: &str = "id, game_id, text, category, weight, base_drink,
    effective_drink, is_custom, rule_order, created_at";

pub fn insert_rule(conn: &Connection, rule: &Rule) -> SwigResult<()> {
    conn.execute(
        "INSERT INTO rules (
            id, game_id, text, category, weight, base_drink,
            effective_drink, is_custom, rule_order, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            rule.id,
            rule.game_id,
            rule.text,
            rule.category.as_str(),
            rule.weight,
            rule.base_drink.value(),
            rule.effective_drink,
            rule.is_custom as i32,
            rule.order,
            format_timestamp(rule.created_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Rules of a game ordered by `order`, insertion order breaking ties.
pub fn list_rules(conn: &Connection, game_id: &str) -> SwigResult<Vec<Rule>> {
    let sql = format!(
        "SELECT {RULE_COLUMNS} FROM rules WHERE game_id = ?1 ORDER BY rule_order, rowid"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![game_id], |row| Ok(row_to_rule(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut rules = Vec::new();
    for row in rows {
        rules.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(rules)
}

pub fn get_rule(conn: &Connection, game_id: &str, rule_id: &str) -> SwigResult<Option<Rule>> {
    let sql = format!("SELECT {RULE_COLUMNS} FROM rules WHERE game_id = ?1 AND id = ?2");
    let result = conn
        .query_row(&sql, params![game_id, rule_id], |row| Ok(row_to_rule(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    result.transpose()
}

/// Overwrite every mutable column of `rule`. `RuleNotFound` when no row has
/// this id within the game.
pub fn update_rule(conn: &Connection, rule: &Rule) -> SwigResult<()> {
    let changed = conn
        .execute(
            "UPDATE rules SET
                text = ?3, category = ?4, weight = ?5, base_drink = ?6,
                effective_drink = ?7, is_custom = ?8, rule_order = ?9
             WHERE id = ?1 AND game_id = ?2",
            params![
                rule.id,
                rule.game_id,
                rule.text,
                rule.category.as_str(),
                rule.weight,
                rule.base_drink.value(),
                rule.effective_drink,
                rule.is_custom as i32,
                rule.order,
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if changed == 0 {
        return Err(SwigError::RuleNotFound {
            id: rule.id.clone(),
        });
    }
    Ok(())
}

pub fn delete_rule(conn: &Connection, game_id: &str, rule_id: &str) -> SwigResult<bool> {
    let deleted = conn
        .execute(
            "DELETE FROM rules WHERE game_id = ?1 AND id = ?2",
            params![game_id, rule_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(deleted > 0)
}

/// Delete a rule and renumber the game to 1..=n, atomically.
pub fn remove_rule(conn: &Connection, game_id: &str, rule_id: &str) -> SwigResult<bool> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("remove_rule begin: {e}")))?;

    let result = delete_rule(&tx, game_id, rule_id).and_then(|deleted| {
        let ids = ordered_ids(&tx, game_id, None)?;
        assign_orders(&tx, &ids)?;
        Ok(deleted)
    });
    match result {
        Ok(deleted) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("remove_rule commit: {e}")))?;
            Ok(deleted)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// Swap every generated rule for `rules`, then renumber: custom rules first
/// in their existing order, then `rules` in slice order.
pub fn replace_generated_rules(
    conn: &Connection,
    game_id: &str,
    rules: &[Rule],
) -> SwigResult<Vec<Rule>> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("replace_generated_rules begin: {e}")))?;

    match replace_generated_inner(&tx, game_id, rules) {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("replace_generated_rules commit: {e}")))?;
        }
        Err(e) => {
            let _ = tx.rollback();
            return Err(e);
        }
    }
    list_rules(conn, game_id)
}

fn replace_generated_inner(conn: &Connection, game_id: &str, rules: &[Rule]) -> SwigResult<()> {
    let mut order: Vec<String> = ordered_ids(conn, game_id, Some(true))?;

    conn.execute(
        "DELETE FROM rules WHERE game_id = ?1 AND is_custom = 0",
        params![game_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    for rule in rules {
        insert_rule(conn, rule)?;
        order.push(rule.id.clone());
    }
    assign_orders(conn, &order)
}

/// Rewrite `order` to 1..=n, keeping relative order.
pub fn renumber_rules(conn: &Connection, game_id: &str) -> SwigResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("renumber_rules begin: {e}")))?;

    let result = ordered_ids(&tx, game_id, None).and_then(|ids| assign_orders(&tx, &ids));
    match result {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("renumber_rules commit: {e}")))?;
            Ok(())
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// Rule ids in display order, optionally restricted by `is_custom`.
fn ordered_ids(conn: &Connection, game_id: &str, custom: Option<bool>) -> SwigResult<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT id FROM rules
             WHERE game_id = ?1 AND (?2 IS NULL OR is_custom = ?2)
             ORDER BY rule_order, rowid",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![game_id, custom.map(i32::from)], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<String>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn assign_orders(conn: &Connection, ids: &[String]) -> SwigResult<()> {
    let mut stmt = conn
        .prepare("UPDATE rules SET rule_order = ?1 WHERE id = ?2")
        .map_err(|e| to_storage_err(e.to_string()))?;
    for (index, id) in ids.iter().enumerate() {
        stmt.execute(params![index as i64 + 1, id])
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}

fn row_to_rule(row: &Row<'_>) -> SwigResult<Rule> {
    let get_err = |e: rusqlite::Error| to_storage_err(e.to_string());

    let category: String = row.get(3).map_err(get_err)?;
    let base_drink: i32 = row.get(5).map_err(get_err)?;
    let is_custom: i32 = row.get(7).map_err(get_err)?;
    let created_at: String = row.get(9).map_err(get_err)?;

    Ok(Rule {
        id: row.get(0).map_err(get_err)?,
        game_id: row.get(1).map_err(get_err)?,
        text: row.get(2).map_err(get_err)?,
        category: category
            .parse::<Category>()
            .map_err(|_| corrupt("rules", format!("unknown category '{category}'")))?,
        weight: row.get(4).map_err(get_err)?,
        base_drink: DrinkLevel::from_value(base_drink)
            .ok_or_else(|| corrupt("rules", format!("drink level {base_drink} out of range")))?,
        effective_drink: row.get(6).map_err(get_err)?,
        is_custom: is_custom != 0,
        order: row.get(8).map_err(get_err)?,
        created_at: parse_timestamp("rules", &created_at)?,
    })
}
