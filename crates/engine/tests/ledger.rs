use engine::{Account, Money};

fn account() -> Account {
    Account::new("Alex F. Aero", "1234567890", Money::new(5000_75))
}

#[test]
fn non_positive_amounts_never_mutate() {
    let mut account = account();
    let before = account.balance();

    for raw in ["0", "0.00", "-1", "-0.004"] {
        let amount: Money = raw.parse().unwrap();
        assert!(!account.deposit(amount), "deposit({raw}) should fail");
        assert!(!account.withdraw(amount), "withdraw({raw}) should fail");
        assert_eq!(account.balance(), before);
    }
}

#[test]
fn withdraw_over_balance_leaves_balance_unchanged() {
    let mut account = account();
    assert!(!account.withdraw(Money::new(5000_76)));
    assert_eq!(account.balance(), Money::new(5000_75));

    // Exactly the balance is still covered.
    assert!(account.withdraw(Money::new(5000_75)));
    assert_eq!(account.balance(), Money::ZERO);
}

#[test]
fn deposit_withdraw_round_trip_from_user_input() {
    let mut account = account();
    let before = account.balance();

    // An amount with three decimals is rounded half-up once, at parse time,
    // so the round trip is exact.
    let amount: Money = "19.995".parse().unwrap();
    assert_eq!(amount, Money::new(20_00));
    assert!(account.deposit(amount));
    assert_eq!(account.balance(), before + Money::new(20_00));
    assert!(account.withdraw(amount));
    assert_eq!(account.balance(), before);
}

#[test]
fn repeated_reads_are_stable() {
    let mut account = account();
    assert!(account.deposit(Money::new(33)));
    let first = account.balance();
    let second = account.balance();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "$5001.08");
}

#[test]
fn identity_is_immutable_and_masked() {
    let account = account();
    assert_eq!(account.holder(), "Alex F. Aero");
    assert_eq!(account.number(), "1234567890");
    assert_eq!(account.masked_number(), "****7890");
}
