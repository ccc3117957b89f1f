//! Benchmark suite for ledger and session operations
//!
//! Uses the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use bank_sim::{Bank, Ledger, Session};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

fn bank_with_account() -> Bank {
    let mut bank = Bank::new();
    bank.create_identity("Ana", "01/02/1990", "123", "Rua A")
        .expect("Identity creation failed");
    bank.create_account("123").expect("Account creation failed");
    bank
}

/// Deposit into one account repeatedly, growing the transaction log
#[divan::bench(args = [10, 1_000])]
fn deposits(n: usize) {
    let mut bank = bank_with_account();
    let account = bank.account_mut(1).expect("Account not found");

    for _ in 0..n {
        account
            .deposit(divan::black_box(Decimal::new(1050, 2)))
            .expect("Deposit failed");
    }
}

/// A full withdrawal period: three accepted withdrawals and one refused
#[divan::bench]
fn withdrawal_period() {
    let mut bank = bank_with_account();
    let account = bank.account_mut(1).expect("Account not found");
    account.deposit(Decimal::new(1000, 0)).expect("Deposit failed");

    for _ in 0..3 {
        account
            .withdraw(divan::black_box(Decimal::new(100, 0)))
            .expect("Withdrawal failed");
    }
    let _ = divan::black_box(account.withdraw(Decimal::new(100, 0)));
}

/// Render a statement with many entries
#[divan::bench(args = [10, 1_000])]
fn statement(bencher: divan::Bencher, n: usize) {
    let mut bank = bank_with_account();
    let account = bank.account_mut(1).expect("Account not found");
    for _ in 0..n {
        account.deposit(Decimal::ONE).expect("Deposit failed");
    }

    bencher.bench_local(|| divan::black_box(account.statement()));
}

/// Replay the demo session script through the shell
#[divan::bench]
fn scripted_session() {
    let script = include_str!("../demos/session.txt");
    let mut bank = Bank::new();
    let mut session = Session::new(&mut bank, script.as_bytes(), Vec::new());

    session.run().expect("Session failed");
}
