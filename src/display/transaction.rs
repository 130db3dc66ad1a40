//! Transaction display formatting
//!
//! Formats transactions for terminal output in table and detail views.

use crate::models::{Transaction, TxKind};

/// Short id prefix shown in lists; commands accept it back
pub const SHORT_ID_LEN: usize = 8;

/// Format a list of transactions as a table, with income/expense totals
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let category_width = transactions
        .iter()
        .map(|t| t.category.as_str().len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<10}  {:<7}  {:<category_width$}  {:>14}  {}\n",
        "Id",
        "Date",
        "Kind",
        "Category",
        "Amount",
        "Description",
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:-<8}  {:-<10}  {:-<7}  {:-<category_width$}  {:->14}  {:-<20}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        category_width = category_width,
    ));

    for txn in transactions {
        let id = txn.id.to_string();
        output.push_str(&format!(
            "{:<8}  {:<10}  {:<7}  {:<category_width$}  {:>14}  {}\n",
            &id[..SHORT_ID_LEN],
            txn.date.format("%Y-%m-%d"),
            txn.kind(),
            txn.category.as_str(),
            txn.amount.to_string(),
            txn.description,
            category_width = category_width,
        ));
    }

    let total_income: crate::models::Money = transactions
        .iter()
        .filter(|t| t.kind() == TxKind::Income)
        .map(|t| t.amount)
        .sum();
    let total_expense: crate::models::Money = transactions
        .iter()
        .filter(|t| t.kind() == TxKind::Expense)
        .map(|t| t.amount)
        .sum();

    output.push_str(&format!(
        "{:-<8}  {:-<10}  {:-<7}  {:-<category_width$}  {:->14}  {:-<20}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{} transactions | income {} | expense {}\n",
        transactions.len(),
        total_income,
        total_expense,
    ));

    output
}
