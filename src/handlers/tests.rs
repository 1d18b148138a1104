//! Handler tests
//!
//! Run the teller commands against an in-memory ledger.

#[cfg(test)]
mod handler_tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::directory::Directory;
    use crate::domain::{DomainError, TransactionKind};
    use crate::error::AppError;
    use crate::handlers::*;
    use crate::ledger::Ledger;

    fn create_client(ledger: &mut Ledger, tax_id: &str) {
        CreateClientHandler::new(ledger)
            .execute(CreateClientCommand::new(
                tax_id.to_string(),
                "Ana Souza".to_string(),
                NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
                "Rua A, 10".to_string(),
            ))
            .unwrap();
    }

    fn ledger_with_account() -> Ledger {
        let mut ledger = Ledger::default();
        create_client(&mut ledger, "111");
        OpenAccountHandler::new(&mut ledger)
            .execute(OpenAccountCommand::new("111".to_string()))
            .unwrap();
        ledger
    }

    fn domain_error(err: AppError) -> DomainError {
        match err {
            AppError::Domain(e) => e,
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    // =========================================================================
    // Client registration
    // =========================================================================

    #[test]
    fn test_create_client() {
        let mut ledger = Ledger::default();
        let result = CreateClientHandler::new(&mut ledger)
            .execute(CreateClientCommand::new(
                " 111 ".to_string(),
                "Ana Souza".to_string(),
                NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
                "Rua A, 10".to_string(),
            ))
            .unwrap();

        assert_eq!(result.tax_id, "111");
        assert_eq!(ledger.find_client("111").unwrap().id(), result.client_id);
    }

    #[test]
    fn test_create_client_requires_tax_id_and_name() {
        let mut ledger = Ledger::default();
        let birth = NaiveDate::from_ymd_opt(1990, 4, 12).unwrap();

        let no_tax_id = CreateClientHandler::new(&mut ledger).execute(CreateClientCommand::new(
            "  ".to_string(),
            "Ana".to_string(),
            birth,
            String::new(),
        ));
        assert!(matches!(no_tax_id, Err(AppError::InvalidInput(_))));

        let no_name = CreateClientHandler::new(&mut ledger).execute(CreateClientCommand::new(
            "111".to_string(),
            String::new(),
            birth,
            String::new(),
        ));
        assert!(matches!(no_name, Err(AppError::InvalidInput(_))));
        assert!(ledger.clients().is_empty());
    }

    #[test]
    fn test_create_client_duplicate() {
        let mut ledger = Ledger::default();
        create_client(&mut ledger, "111");

        let result = CreateClientHandler::new(&mut ledger).execute(CreateClientCommand::new(
            "111".to_string(),
            "Other".to_string(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            String::new(),
        ));
        assert_eq!(
            domain_error(result.unwrap_err()),
            DomainError::DuplicateTaxId("111".to_string())
        );
    }

    #[test]
    fn test_open_account_unknown_client() {
        let mut ledger = Ledger::default();
        let result = OpenAccountHandler::new(&mut ledger)
            .execute(OpenAccountCommand::new("404".to_string()));
        assert!(domain_error(result.unwrap_err()).is_not_found());
    }

    // =========================================================================
    // Deposits and withdrawals
    // =========================================================================

    #[test]
    fn test_deposit_is_recorded() {
        let mut ledger = ledger_with_account();
        let result = DepositHandler::new(&mut ledger)
            .execute(DepositCommand::new("111".to_string(), dec!(1000)))
            .unwrap();

        assert_eq!(result.account_number, 1);
        assert_eq!(result.kind, TransactionKind::Deposit);
        assert_eq!(result.balance.value(), dec!(1000));
        assert_eq!(result.history_len, 1);
    }

    #[test]
    fn test_deposit_invalid_amount_not_recorded() {
        let mut ledger = ledger_with_account();
        let result = DepositHandler::new(&mut ledger)
            .execute(DepositCommand::new("111".to_string(), dec!(0)));

        assert_eq!(
            domain_error(result.unwrap_err()),
            DomainError::InvalidAmount(dec!(0))
        );
        assert!(ledger.find_account("111").unwrap().history().is_empty());
    }

    #[test]
    fn test_deposit_client_without_account() {
        let mut ledger = Ledger::default();
        create_client(&mut ledger, "111");

        let result = DepositHandler::new(&mut ledger)
            .execute(DepositCommand::new("111".to_string(), dec!(10)));
        assert_eq!(
            domain_error(result.unwrap_err()),
            DomainError::AccountNotFound("111".to_string())
        );
    }

    #[test]
    fn test_withdraw_insufficient_is_recorded() {
        let mut ledger = ledger_with_account();
        DepositHandler::new(&mut ledger)
            .execute(DepositCommand::new("111".to_string(), dec!(100)))
            .unwrap();

        let result = WithdrawHandler::new(&mut ledger)
            .execute(WithdrawCommand::new("111".to_string(), dec!(300)));
        assert!(matches!(
            domain_error(result.unwrap_err()),
            DomainError::InsufficientFunds { .. }
        ));

        let account = ledger.find_account("111").unwrap();
        assert_eq!(account.balance().value(), dec!(100));
        assert_eq!(account.history().len(), 2);
    }

    #[test]
    fn test_withdraw_over_limit_refused_before_recording() {
        let mut ledger = ledger_with_account();
        DepositHandler::new(&mut ledger)
            .execute(DepositCommand::new("111".to_string(), dec!(1000)))
            .unwrap();

        let result = WithdrawHandler::new(&mut ledger)
            .execute(WithdrawCommand::new("111".to_string(), dec!(600)));
        assert_eq!(
            domain_error(result.unwrap_err()),
            DomainError::LimitExceeded {
                requested: dec!(600),
                limit: dec!(500),
            }
        );

        let account = ledger.find_account("111").unwrap();
        assert_eq!(account.balance().value(), dec!(1000));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_withdraw_count_cap() {
        let mut ledger = ledger_with_account();
        DepositHandler::new(&mut ledger)
            .execute(DepositCommand::new("111".to_string(), dec!(1000)))
            .unwrap();

        for expected in [dec!(900), dec!(800), dec!(700)] {
            let result = WithdrawHandler::new(&mut ledger)
                .execute(WithdrawCommand::new("111".to_string(), dec!(100)))
                .unwrap();
            assert_eq!(result.balance.value(), expected);
        }

        let result = WithdrawHandler::new(&mut ledger)
            .execute(WithdrawCommand::new("111".to_string(), dec!(100)));
        assert_eq!(
            domain_error(result.unwrap_err()),
            DomainError::WithdrawalCountExceeded { max: 3 }
        );
        assert_eq!(
            ledger.find_account("111").unwrap().balance().value(),
            dec!(700)
        );
    }

    #[test]
    fn test_failed_withdrawal_consumes_count() {
        let mut ledger = ledger_with_account();
        DepositHandler::new(&mut ledger)
            .execute(DepositCommand::new("111".to_string(), dec!(50)))
            .unwrap();

        for _ in 0..3 {
            let result = WithdrawHandler::new(&mut ledger)
                .execute(WithdrawCommand::new("111".to_string(), dec!(100)));
            assert!(matches!(
                domain_error(result.unwrap_err()),
                DomainError::InsufficientFunds { .. }
            ));
        }

        let result = WithdrawHandler::new(&mut ledger)
            .execute(WithdrawCommand::new("111".to_string(), dec!(10)));
        assert_eq!(
            domain_error(result.unwrap_err()),
            DomainError::WithdrawalCountExceeded { max: 3 }
        );
    }
}
