//! Tab labels: единственный источник правды для заголовков табов.

pub const EMPLOYEE_DETAIL_PREFIX: &str = "a001_employee_detail_";

/// Readable title for a static tab key. Unknown keys yield `None`.
pub fn tab_label_for_key(key: &str) -> Option<&'static str> {
    let label = match key {
        "a001_employee" => "Employees",
        "a002_budget" => "Budgets",
        "a003_overtime" => "Overtime",
        "a004_reimbursement" => "Reimbursements",
        "a005_accounting_period" => "Accounting periods",
        "p900_trial_balance" => "Trial balance",
        "sys_profile" => "My profile",
        _ => return None,
    };
    Some(label)
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

pub fn employee_detail_key(id: &str) -> String {
    format!("{}{}", EMPLOYEE_DETAIL_PREFIX, id)
}

/// Record id carried by a detail tab key.
pub fn detail_id<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    key.strip_prefix(prefix).filter(|id| !id.is_empty())
}

/// Title for any tab key, including detail tabs restored from the URL.
pub fn tab_title_for_key(key: &str) -> String {
    if let Some(label) = tab_label_for_key(key) {
        return label.to_string();
    }
    if let Some(id) = detail_id(key, EMPLOYEE_DETAIL_PREFIX) {
        return detail_tab_label("Employee", id);
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_labels() {
        assert_eq!(tab_label_for_key("a003_overtime"), Some("Overtime"));
        assert_eq!(tab_label_for_key("p900_trial_balance"), Some("Trial balance"));
        assert_eq!(tab_label_for_key("nope"), None);
    }

    #[test]
    fn test_detail_keys() {
        let key = employee_detail_key("42");
        assert_eq!(key, "a001_employee_detail_42");
        assert_eq!(detail_id(&key, EMPLOYEE_DETAIL_PREFIX), Some("42"));
        assert_eq!(detail_id("a001_employee_detail_", EMPLOYEE_DETAIL_PREFIX), None);
        assert_eq!(detail_id("a001_employee", EMPLOYEE_DETAIL_PREFIX), None);
    }

    #[test]
    fn test_tab_title_for_key() {
        assert_eq!(tab_title_for_key("a002_budget"), "Budgets");
        assert_eq!(tab_title_for_key("a001_employee_detail_7"), "Employee · 7");
        assert_eq!(tab_title_for_key("mystery"), "mystery");
    }
}
