//! Server-rendered HTML pages.
//!
//! Views take plain data and return a complete document. Every piece of
//! stored or user-supplied text goes through `html_escape` before it is
//! written into the markup.

use axum::http::StatusCode;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write;

use crate::models::{Employee, Invoice};

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse}td,th{border:1px solid #ccc;padding:.25rem .5rem;text-align:left}\
td.num,th.num{text-align:right}.error{color:#b00020}nav a{margin-right:1rem}\
label{display:block;margin:.5rem 0}";

/// Two decimals with a decimal comma: `1234.5` becomes `1234,50`.
#[must_use]
pub fn format_decimal(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

#[must_use]
pub fn format_money(value: f64) -> String {
    format!("€ {}", format_decimal(value))
}

/// Relative URL of the invoice page; the period is percent-encoded.
#[must_use]
pub fn invoice_href(employee_id: impl std::fmt::Display, period: &str) -> String {
    format!("/factuur/{employee_id}/{}", urlencoding::encode(period))
}

fn layout(title: &str, user: Option<&str>, body: &str) -> String {
    let nav = user.map_or_else(String::new, |user| {
        format!(
            "<nav><a href=\"/\">Start</a><a href=\"/werknemers\">Werknemers</a>\
             <a href=\"/uren\">Uren</a><a href=\"/factuur\">Factuur maken</a>\
             <span>Ingelogd als {}</span> <a href=\"/logout\">Uitloggen</a></nav>",
            text(user)
        )
    });

    format!(
        "<!DOCTYPE html>\n<html lang=\"nl\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - Urenregistratie</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n{nav}\n<h2>{title}</h2>\n{body}\n</body>\n</html>\n",
        title = text(title),
    )
}

fn error_line(error: Option<&str>) -> String {
    error.map_or_else(String::new, |e| {
        format!("<p class=\"error\">{}</p>", text(e))
    })
}

fn employee_options(employees: &[Employee]) -> String {
    employees.iter().fold(String::new(), |mut acc, e| {
        let _ = write!(
            acc,
            "<option value=\"{}\">{}</option>",
            e.id,
            text(&e.name)
        );
        acc
    })
}

#[must_use]
pub fn login_page(error: Option<&str>) -> String {
    let body = format!(
        "{}<form method=\"post\" action=\"/login\">\
         <label>Gebruikersnaam <input name=\"username\" autocomplete=\"username\" required></label>\
         <label>Wachtwoord <input name=\"password\" type=\"password\" autocomplete=\"current-password\" required></label>\
         <button type=\"submit\">Inloggen</button></form>",
        error_line(error)
    );
    layout("Inloggen", None, &body)
}

#[must_use]
pub fn home_page(user: &str) -> String {
    let body = "<ul>\
        <li><a href=\"/werknemers\">Werknemers</a></li>\
        <li><a href=\"/uren\">Uren</a></li>\
        <li><a href=\"/factuur\">Factuur maken</a></li>\
        </ul>";
    layout("Urenregistratie", Some(user), body)
}

#[must_use]
pub fn employees_page(user: &str, employees: &[Employee]) -> String {
    let mut body = String::new();

    if employees.is_empty() {
        body.push_str("<p>Nog geen werknemers.</p>");
    } else {
        body.push_str(
            "<table><tr><th>#</th><th>Naam</th><th>Adres</th><th class=\"num\">Uursalaris</th></tr>",
        );
        for e in employees {
            let _ = write!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"num\">{}</td></tr>",
                e.id,
                text(&e.name),
                text(e.address.as_deref().unwrap_or("")),
                format_money(e.hourly_rate)
            );
        }
        body.push_str("</table>");
    }

    body.push_str(
        "<h3>Werknemer toevoegen</h3>\
         <form method=\"post\" action=\"/werknemers\">\
         <label>Naam <input name=\"naam\" required></label>\
         <label>Adres <input name=\"adres\"></label>\
         <label>Uursalaris <input name=\"uursalaris\" inputmode=\"decimal\" required></label>\
         <button type=\"submit\">Opslaan</button></form>",
    );

    layout("Werknemers", Some(user), &body)
}

#[must_use]
pub fn hours_page(user: &str, employees: &[Employee], periods: &[String]) -> String {
    if employees.is_empty() {
        return layout(
            "Uren",
            Some(user),
            "<p>Voeg eerst een <a href=\"/werknemers\">werknemer</a> toe.</p>",
        );
    }

    let suggestions = periods.iter().fold(String::new(), |mut acc, p| {
        let _ = write!(acc, "<option value=\"{}\">", attr(p));
        acc
    });

    let body = format!(
        "<form method=\"post\" action=\"/uren\">\
         <label>Werknemer <select name=\"werknemer_id\">{}</select></label>\
         <label>Periode <input name=\"periode\" list=\"periodes\" placeholder=\"2024-03\" required></label>\
         <datalist id=\"periodes\">{}</datalist>\
         <label>Aantal uren <input name=\"aantal_uren\" inputmode=\"decimal\" required></label>\
         <button type=\"submit\">Opslaan</button></form>",
        employee_options(employees),
        suggestions
    );

    layout("Uren", Some(user), &body)
}

#[must_use]
pub fn invoice_selection_page(user: &str, employees: &[Employee], periods: &[String]) -> String {
    if employees.is_empty() || periods.is_empty() {
        return layout(
            "Factuur maken",
            Some(user),
            "<p>Er zijn nog geen uren geregistreerd.</p>",
        );
    }

    let period_options = periods.iter().fold(String::new(), |mut acc, p| {
        let _ = write!(
            acc,
            "<option value=\"{}\">{}</option>",
            attr(p),
            text(p)
        );
        acc
    });

    let body = format!(
        "<form method=\"get\" action=\"/factuur_resultaat\">\
         <label>Werknemer <select name=\"werknemer_id\">{}</select></label>\
         <label>Periode <select name=\"periode\">{}</select></label>\
         <button type=\"submit\">Factuur tonen</button></form>",
        employee_options(employees),
        period_options
    );

    layout("Factuur maken", Some(user), &body)
}

#[must_use]
pub fn invoice_page(user: &str, invoice: &Invoice) -> String {
    let employee = &invoice.employee;
    let mut body = format!(
        "<p><strong>{}</strong><br>{}</p><p>Periode: {}</p>",
        text(&employee.name),
        text(employee.address.as_deref().unwrap_or("")),
        text(invoice.period.as_str())
    );

    if invoice.entries.is_empty() {
        body.push_str("<p>Geen uren geregistreerd in deze periode.</p>");
    } else {
        body.push_str("<table><tr><th>Geregistreerd op</th><th class=\"num\">Uren</th></tr>");
        for entry in &invoice.entries {
            let _ = write!(
                body,
                "<tr><td>{}</td><td class=\"num\">{}</td></tr>",
                text(&entry.created_at),
                format_decimal(entry.hours)
            );
        }
        body.push_str("</table>");
    }

    let _ = write!(
        body,
        "<table>\
         <tr><th>Totaal uren</th><td class=\"num\">{}</td></tr>\
         <tr><th>Uurtarief</th><td class=\"num\">{}</td></tr>\
         <tr><th>Bedrag</th><td class=\"num\"><strong>{}</strong></td></tr>\
         </table><p><a href=\"/factuur\">Andere factuur</a></p>",
        format_decimal(invoice.total_hours),
        format_money(invoice.hourly_rate),
        format_money(invoice.amount)
    );

    layout("Factuur", Some(user), &body)
}

#[must_use]
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<p class=\"error\">{}</p><p><a href=\"/\">Terug naar start</a></p>",
        text(message)
    );
    let title = status.canonical_reason().unwrap_or("Fout");
    layout(title, None, &body)
}
