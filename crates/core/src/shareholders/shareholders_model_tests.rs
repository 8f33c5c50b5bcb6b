//! Tests for shareholder models and role grouping.

#[cfg(test)]
mod tests {
    use crate::shareholders::{NewShareholder, RoleGroup, ShareholderRole};
    use std::str::FromStr;

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&ShareholderRole::Founder).unwrap(),
            "\"FOUNDER\""
        );
        assert_eq!(
            serde_json::to_string(&ShareholderRole::Advisor).unwrap(),
            "\"ADVISOR\""
        );
    }

    #[test]
    fn test_role_from_str_round_trip() {
        for role in [
            ShareholderRole::Founder,
            ShareholderRole::Investor,
            ShareholderRole::Employee,
            ShareholderRole::Advisor,
        ] {
            assert_eq!(ShareholderRole::from_str(role.as_str()).unwrap(), role);
        }
        assert!(ShareholderRole::from_str("JANITOR").is_err());
    }

    #[test]
    fn test_role_group_mapping_is_fixed() {
        assert_eq!(ShareholderRole::Founder.group(), RoleGroup::Founders);
        assert_eq!(ShareholderRole::Investor.group(), RoleGroup::Investors);
        assert_eq!(
            ShareholderRole::Employee.group(),
            RoleGroup::EmployeesAndAdvisors
        );
        assert_eq!(
            ShareholderRole::Advisor.group(),
            RoleGroup::EmployeesAndAdvisors
        );
    }

    #[test]
    fn test_role_group_labels() {
        assert_eq!(RoleGroup::Founders.label(), "Founders");
        assert_eq!(RoleGroup::Investors.label(), "Investors");
        assert_eq!(RoleGroup::EmployeesAndAdvisors.label(), "Employees & Advisors");
    }

    #[test]
    fn test_build_mints_an_id_when_absent() {
        let shareholder = NewShareholder {
            id: None,
            name: "Alice".to_string(),
            role: ShareholderRole::Founder,
            email: None,
        }
        .build()
        .unwrap();
        assert!(!shareholder.id.is_empty());
    }

    #[test]
    fn test_build_keeps_a_supplied_id() {
        let shareholder = NewShareholder {
            id: Some("sh-alice".to_string()),
            name: "Alice".to_string(),
            role: ShareholderRole::Founder,
            email: Some("alice@example.com".to_string()),
        }
        .build()
        .unwrap();
        assert_eq!(shareholder.id, "sh-alice");
        assert_eq!(shareholder.email.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = NewShareholder {
            id: None,
            name: "   ".to_string(),
            role: ShareholderRole::Employee,
            email: None,
        }
        .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let result = NewShareholder {
            id: None,
            name: "Bob".to_string(),
            role: ShareholderRole::Employee,
            email: Some("not-an-address".to_string()),
        }
        .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_email_is_dropped() {
        let shareholder = NewShareholder {
            id: None,
            name: "Bob".to_string(),
            role: ShareholderRole::Employee,
            email: Some("  ".to_string()),
        }
        .build()
        .unwrap();
        assert_eq!(shareholder.email, None);
    }
}
