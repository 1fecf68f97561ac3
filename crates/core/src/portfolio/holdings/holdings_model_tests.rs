#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::portfolio::holdings::{Bucket, Holding, Investment};
    use crate::quotes::Quote;

    fn holding_fixture() -> Holding {
        Holding {
            holding_id: Some(17),
            investment: Investment {
                investment_id: Some(3),
                symbol: "VTI".to_string(),
                company_name: Some("Vanguard Total Stock Market ETF".to_string()),
                exchange: Some("NYSEARCA".to_string()),
                sector: Some("Blend".to_string()),
                investment_type: None,
                expense_ratio: Some(dec!(0.03)),
            },
            account: None,
            quantity: dec!(10),
            purchase_price: dec!(150.25),
            purchase_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            bucket: Some(Bucket::Bucket2),
            quotes: vec![
                Quote::new(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(), dec!(220.5)),
                Quote::new(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(), dec!(219.75)),
            ],
            value_at_purchase: None,
            current_value: None,
        }
    }

    #[test]
    fn cost_basis_is_quantity_times_purchase_price() {
        assert_eq!(holding_fixture().cost_basis(), dec!(1502.50));
    }

    #[test]
    fn server_supplied_cost_basis_wins() {
        let mut holding = holding_fixture();
        holding.value_at_purchase = Some(dec!(1500));
        assert_eq!(holding.cost_basis(), dec!(1500));
    }

    #[test]
    fn market_value_uses_the_most_recent_quote() {
        let holding = holding_fixture();
        assert_eq!(holding.most_recent_quote().unwrap().close, dec!(220.5));
        assert_eq!(holding.market_value(), Some(dec!(2205.0)));
        assert_eq!(holding.change_in_value(), Some(dec!(702.50)));
        assert_eq!(holding.change_in_price(), Some(dec!(70.25)));
    }

    #[test]
    fn missing_quote_means_absent_valuation_not_zero() {
        let mut holding = holding_fixture();
        holding.quotes.clear();
        assert!(!holding.has_quote());
        assert_eq!(holding.market_value(), None);
        assert_eq!(holding.change_in_value(), None);
        assert_eq!(holding.change_in_price(), None);
        // Cost basis needs no quote.
        assert_eq!(holding.cost_basis(), dec!(1502.50));
    }

    #[test]
    fn server_supplied_current_value_counts_as_quoted() {
        let mut holding = holding_fixture();
        holding.quotes.clear();
        holding.current_value = Some(dec!(2200));
        assert!(holding.has_quote());
        assert_eq!(holding.market_value(), Some(dec!(2200)));
        assert_eq!(holding.change_in_value(), Some(dec!(697.50)));
    }

    #[test]
    fn deserializes_the_server_shape() {
        let payload = json!({
            "holdingId": 42,
            "investment": {
                "investmentId": 7,
                "symbol": "AAPL",
                "companyName": "Apple Inc",
                "sector": "Technology"
            },
            "account": {
                "accountId": 1,
                "accountName": "Brokerage",
                "cashOnAccount": 500.25
            },
            "quantity": 4,
            "purchasePrice": 100.5,
            "bucketEnum": "BUCKET_1",
            "quotes": [{ "date": "2026-08-06", "close": 110.25 }]
        });

        let holding: Holding = serde_json::from_value(payload).unwrap();
        assert_eq!(holding.holding_id, Some(42));
        assert_eq!(holding.investment.symbol, "AAPL");
        assert_eq!(holding.bucket, Some(Bucket::Bucket1));
        assert_eq!(
            holding.account.as_ref().unwrap().cash_on_account,
            Some(dec!(500.25))
        );
        assert_eq!(holding.market_value(), Some(dec!(441.0)));
        assert_eq!(holding.cost_basis(), dec!(402.0));
    }

    #[test]
    fn bucket_serde_names_match_the_wire() {
        assert_eq!(serde_json::to_value(Bucket::Bucket3).unwrap(), json!("BUCKET_3"));
        let bucket: Bucket = serde_json::from_value(json!("BUCKET_0")).unwrap();
        assert_eq!(bucket, Bucket::Bucket0);
    }

    #[test]
    fn bucket_descriptions() {
        assert_eq!(Bucket::Bucket0.description(), "excluded");
        assert_eq!(Bucket::Bucket1.description(), "0 - 3 years");
        assert_eq!(Bucket::Bucket2.description(), "3 - 10 years");
        assert_eq!(Bucket::Bucket3.description(), "Beyond 10 years");
    }
}
