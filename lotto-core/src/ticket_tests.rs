#[cfg(test)]
mod tests {
    use crate::{LottoError, LottoNumber, LottoTicket};

    fn ticket(v: [i64; 6]) -> LottoTicket {
        LottoTicket::from_values(v).unwrap()
    }

    fn n(v: i64) -> LottoNumber {
        LottoNumber::of(v).unwrap()
    }

    #[test]
    fn builds_from_numbers_or_values() {
        let a = LottoTicket::new([6, 5, 4, 3, 2, 1].map(n)).unwrap();
        let b = ticket([1, 2, 3, 4, 5, 6]);
        assert_eq!(a, b);
    }

    #[test]
    fn wrong_size_is_rejected() {
        assert_eq!(
            LottoTicket::from_values([1, 2, 3, 4, 5]),
            Err(LottoError::InvalidTicketSize { size: 5 })
        );
        assert_eq!(
            LottoTicket::from_values([1, 2, 3, 4, 5, 6, 7]),
            Err(LottoError::InvalidTicketSize { size: 7 })
        );
        assert_eq!(
            LottoTicket::from_values(std::iter::empty()),
            Err(LottoError::InvalidTicketSize { size: 0 })
        );
    }

    #[test]
    fn duplicate_is_rejected_and_named() {
        let err = LottoTicket::from_values([1, 2, 3, 4, 4, 6]).unwrap_err();
        assert_eq!(err, LottoError::DuplicateNumber { number: n(4) });
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn size_is_checked_before_duplicates() {
        assert_eq!(
            LottoTicket::from_values([1, 1, 2, 3, 4, 5, 6]),
            Err(LottoError::InvalidTicketSize { size: 7 })
        );
    }

    #[test]
    fn out_of_range_value_wins_over_other_errors() {
        assert_eq!(
            LottoTicket::from_values([1, 1, 46]),
            Err(LottoError::OutOfRange { value: 46 })
        );
    }

    #[test]
    fn count_matches_is_symmetric_and_reflexive() {
        let tickets = [
            ticket([1, 2, 3, 4, 5, 6]),
            ticket([1, 2, 3, 7, 8, 9]),
            ticket([40, 41, 42, 43, 44, 45]),
            ticket([6, 13, 20, 27, 34, 41]),
        ];
        for a in &tickets {
            assert_eq!(a.count_matches(a), 6);
            for b in &tickets {
                assert_eq!(a.count_matches(b), b.count_matches(a));
            }
        }
        assert_eq!(tickets[0].count_matches(&tickets[1]), 3);
        assert_eq!(tickets[0].count_matches(&tickets[2]), 0);
        assert_eq!(tickets[2].count_matches(&tickets[3]), 1);
    }

    #[test]
    fn contains_checks_membership() {
        let t = ticket([1, 2, 3, 4, 5, 45]);
        assert!(t.contains(n(45)));
        assert!(t.contains(n(1)));
        assert!(!t.contains(n(44)));
    }

    #[test]
    fn display_is_sorted() {
        let t = ticket([45, 3, 12, 1, 30, 7]);
        assert_eq!(t.to_string(), "[1, 3, 7, 12, 30, 45]");
        assert_eq!(t.values(), [1, 3, 7, 12, 30, 45]);
        assert_eq!(t.iter().count(), 6);
    }

    #[test]
    fn parses_comma_separated_values() {
        let t: LottoTicket = "8, 21,23,41, 42 ,43".parse().unwrap();
        assert_eq!(t.values(), [8, 21, 23, 41, 42, 43]);
    }

    #[test]
    fn parse_reports_bad_input() {
        assert!(matches!(
            "1,2,x,4,5,6".parse::<LottoTicket>(),
            Err(LottoError::Parse { .. })
        ));
        assert_eq!(
            "1,2,3,4,5,99".parse::<LottoTicket>(),
            Err(LottoError::OutOfRange { value: 99 })
        );
    }
}
