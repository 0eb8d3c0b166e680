use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Customer {
    pub name: String,
    pub contact: String,
    pub address: String,
    pub email: String,
}

impl Customer {
    pub fn new(name: String, contact: String, address: String, email: String) -> Self {
        Self {
            name,
            contact,
            address,
            email,
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {})",
            self.name, self.contact, self.address, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_display() {
        let customer = Customer::new(
            "John Doe".into(),
            "555-0101".into(),
            "12 Elm St".into(),
            "john@example.com".into(),
        );
        assert_eq!(
            customer.to_string(),
            "John Doe (555-0101, 12 Elm St, john@example.com)"
        );
    }
}
