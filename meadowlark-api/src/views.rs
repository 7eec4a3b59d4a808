//! Server-rendered pages. The site is a handful of small pages, so they are
//! plain string builders behind this module instead of a template engine;
//! handlers never touch markup directly.

use meadowlark_core::catalog::VacationPackage;

use crate::flash::Flash;

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let flash_html = match flash {
        Some(f) => format!(
            r#"<div class="alert alert-{}"><strong>{}</strong> {}</div>"#,
            f.severity.css_class(),
            escape(&f.intro),
            escape(&f.message),
        ),
        None => String::new(),
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\">\
         <title>{} | Meadowlark Travel</title></head>\n\
         <body>\n<header><h1>Meadowlark Travel</h1></header>\n{}\n{}\n</body>\n</html>\n",
        escape(title),
        flash_html,
        body
    )
}

/// Converted prices that came out as NaN (unsupported currency code) render
/// as a placeholder rather than "NaN".
fn price_label(amount: f64, currency: &str) -> String {
    if amount.is_nan() {
        "price unavailable".to_string()
    } else {
        format!("{:.2} {}", amount, escape(currency))
    }
}

pub fn home(flash: Option<&Flash>) -> String {
    layout(
        "Welcome",
        flash,
        "<p>Your one-stop shop for Oregon vacations.</p>\
         <p><a href=\"/vacations\">Browse our vacation packages</a></p>",
    )
}

pub fn about(fortune: &str, flash: Option<&Flash>) -> String {
    let body = format!(
        "<p>Meadowlark Travel has served the Willamette Valley since 2014.</p>\
         <blockquote>Your fortune: {}</blockquote>",
        escape(fortune)
    );
    layout("About", flash, &body)
}

pub fn contact(flash: Option<&Flash>) -> String {
    layout(
        "Contact",
        flash,
        "<p>Questions? Email us at <a href=\"mailto:info@meadowlarktravel.com\">\
         info@meadowlarktravel.com</a>.</p>",
    )
}

pub fn thank_you() -> String {
    layout("Thank You", None, "<p>Thank you for getting in touch!</p>")
}

pub fn vacations_page(
    packages: &[(VacationPackage, f64)],
    currency: &str,
    flash: Option<&Flash>,
) -> String {
    let mut body = String::from("<h2>Vacation Packages</h2>\n<ul>\n");
    for (pkg, price) in packages {
        body.push_str(&format!(
            "<li><a href=\"/vacation/{slug}\">{name}</a> ({category}) \
             <span class=\"price\">{price}</span>",
            slug = escape(&pkg.slug),
            name = escape(&pkg.name),
            category = escape(&pkg.category),
            price = price_label(*price, currency),
        ));
        if pkg.in_season {
            body.push_str(&format!(
                "<form method=\"POST\" action=\"/vacations\">\
                 <input type=\"hidden\" name=\"purchase_sku\" value=\"{}\">\
                 <button type=\"submit\">Buy now!</button></form>",
                escape(&pkg.sku)
            ));
        } else {
            body.push_str(&format!(
                "<a href=\"/notify-me-when-in-season?sku={}\">Notify me when this is in season</a>",
                escape(&pkg.sku)
            ));
        }
        body.push_str("</li>\n");
    }
    body.push_str("</ul>\n");
    body.push_str(
        "<p>Currency: \
         <a href=\"/set-currency/USD\">USD</a> | \
         <a href=\"/set-currency/GBP\">GBP</a> | \
         <a href=\"/set-currency/BTC\">BTC</a></p>",
    );
    layout("Vacations", flash, &body)
}

pub fn vacation_detail(pkg: &VacationPackage, flash: Option<&Flash>) -> String {
    let mut body = format!(
        "<h2>{name}</h2>\n<p>{description}</p>\n\
         <p>Category: {category}. Up to {guests} guests. Price: ${price:.2} USD.</p>\n",
        name = escape(&pkg.name),
        description = escape(&pkg.description),
        category = escape(&pkg.category),
        guests = pkg.maximum_guests,
        price = pkg.price_usd(),
    );
    if pkg.requires_waiver == Some(true) {
        body.push_str("<p><em>This vacation requires a signed waiver.</em></p>\n");
    }
    if let Some(notes) = &pkg.notes {
        body.push_str(&format!("<p>Note: {}</p>\n", escape(notes)));
    }
    layout(&pkg.name, flash, &body)
}

pub fn notify_form(sku: &str) -> String {
    let body = format!(
        "<h2>Notify me when this vacation is in season</h2>\n\
         <form method=\"POST\" action=\"/notify-me-when-in-season\">\
         <input type=\"hidden\" name=\"sku\" value=\"{}\">\
         <label>Email <input type=\"email\" name=\"email\"></label>\
         <button type=\"submit\">Submit</button></form>",
        escape(sku)
    );
    layout("Notify Me", None, &body)
}

pub fn newsletter_form(color_scheme: &str, flash: Option<&Flash>) -> String {
    let body = format!(
        "<h2 class=\"scheme-{}\">Sign up for our newsletter</h2>\n\
         <form method=\"POST\" action=\"/newsletter\">\
         <label>Name <input type=\"text\" name=\"name\"></label>\
         <label>Email <input type=\"email\" name=\"email\"></label>\
         <button type=\"submit\">Sign up</button></form>",
        escape(color_scheme)
    );
    layout("Newsletter", flash, &body)
}

pub fn newsletter_archive(flash: Option<&Flash>) -> String {
    layout(
        "Newsletter Archive",
        flash,
        "<p>Past issues will appear here.</p>",
    )
}

pub fn not_found() -> String {
    layout("Not Found", None, "<p>404: that page has sailed away.</p>")
}

pub fn server_error() -> String {
    layout(
        "Server Error",
        None,
        "<p>500: something went wrong on our end. Please try again later.</p>",
    )
}
