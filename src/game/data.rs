use lazy_static::lazy_static;

use super::field::FieldType;

/// One presidency: a row of the quiz table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct President {
    /// The president's name.
    pub name: String,
    /// Years in office, e.g. "1861-1865".
    pub term: String,
    /// Political party, e.g. "Republican".
    pub party: String,
}

impl President {
    /// The value of the given field of this record.
    pub fn field(&self, field_type: FieldType) -> &str {
        match field_type {
            FieldType::President => &self.name,
            FieldType::Term => &self.term,
            FieldType::Party => &self.party,
        }
    }
}

lazy_static! {
    /// Every presidency in order. Presidents with non-consecutive terms
    /// (Cleveland, Trump) appear once per term.
    pub static ref PRESIDENTS: Vec<President> = {
        let mut v = Vec::new();
        let rows_raw = include_str!("data/presidents.txt");
        for line in rows_raw.lines().filter(|l| !l.is_empty()) {
            let mut fields = line.split('|');
            v.push(President {
                name: fields.next().unwrap().to_string(),
                term: fields.next().unwrap().to_string(),
                party: fields.next().unwrap().to_string(),
            });
        }
        v
    };
}

#[cfg(test)]
mod tests {
    use super::FieldType;

    #[test]
    fn load_presidents() {
        use super::PRESIDENTS;

        assert_eq!(PRESIDENTS.len(), 47);
        assert!(PRESIDENTS
            .iter()
            .all(|p| !p.name.is_empty() && !p.term.is_empty() && !p.party.is_empty()));

        assert_eq!(PRESIDENTS[0].name, "George Washington");
        assert_eq!(PRESIDENTS[15].name, "Abraham Lincoln");
        assert_eq!(PRESIDENTS[15].term, "1861-1865");
        assert_eq!(PRESIDENTS[15].party, "Republican");

        // Cleveland served two non-consecutive terms
        assert_eq!(PRESIDENTS[21].name, "Grover Cleveland");
        assert_eq!(PRESIDENTS[23].name, "Grover Cleveland");
    }

    #[test]
    fn field_access() {
        use super::PRESIDENTS;

        let lincoln = &PRESIDENTS[15];
        assert_eq!(lincoln.field(FieldType::President), "Abraham Lincoln");
        assert_eq!(lincoln.field(FieldType::Term), "1861-1865");
        assert_eq!(lincoln.field(FieldType::Party), "Republican");
    }
}
