use crate::error::{Result, StoreError};
use chrono::NaiveDate;
use rolodex_core::domain::{Birthday, Record};
use rolodex_core::AddressBook;
use rusqlite::{params, Connection};
use std::collections::HashMap;

const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

pub struct ContactsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> ContactsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Rebuilds the address book in saved order. Names and phones go back
    /// through the field constructors; birthdays are only checked for shape.
    pub fn load_book(&self) -> Result<AddressBook> {
        let mut phones = self.phones_by_contact()?;
        let mut stmt = self
            .conn
            .prepare("SELECT name, birthday FROM contacts ORDER BY position ASC;")?;
        let mut rows = stmt.query([])?;

        let mut book = AddressBook::new();
        while let Some(row) = rows.next()? {
            let name: String = row.get(0)?;
            let birthday: Option<String> = row.get(1)?;

            let mut record = Record::new(&name)?;
            for number in phones.remove(&name).unwrap_or_default() {
                record.add_phone(&number)?;
            }
            if let Some(raw) = birthday {
                let date = parse_stored_date(&raw)?;
                record.set_birthday(Some(Birthday::from_stored(date)));
            }
            book.add_record(record)?;
        }
        Ok(book)
    }

    /// Replaces everything stored with `book` in a single transaction.
    pub fn save_book(&self, book: &AddressBook) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM contact_phones;", [])?;
        tx.execute("DELETE FROM contacts;", [])?;
        {
            let mut insert_contact = tx.prepare(
                "INSERT INTO contacts (name, position, birthday) VALUES (?1, ?2, ?3);",
            )?;
            let mut insert_phone = tx.prepare(
                "INSERT INTO contact_phones (contact_name, position, number)
                 VALUES (?1, ?2, ?3);",
            )?;
            for (position, record) in book.records().iter().enumerate() {
                let name = record.name().value();
                let birthday = record
                    .birthday()
                    .map(|birthday| birthday.value().format(STORED_DATE_FORMAT).to_string());
                insert_contact.execute(params![name, position as i64, birthday])?;
                for (phone_position, phone) in record.phones().iter().enumerate() {
                    insert_phone.execute(params![name, phone_position as i64, phone.value()])?;
                }
            }
        }
        tx.commit()?;
        Ok(())
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))?;
        Ok(count)
    }

    fn phones_by_contact(&self) -> Result<HashMap<String, Vec<String>>> {
        let mut stmt = self.conn.prepare(
            "SELECT contact_name, number FROM contact_phones
             ORDER BY contact_name ASC, position ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut phones: HashMap<String, Vec<String>> = HashMap::new();
        while let Some(row) = rows.next()? {
            let name: String = row.get(0)?;
            let number: String = row.get(1)?;
            phones.entry(name).or_default().push(number);
        }
        Ok(phones)
    }
}

fn parse_stored_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, STORED_DATE_FORMAT)
        .map_err(|_| StoreError::InvalidData(format!("birthday {raw:?}")))
}
