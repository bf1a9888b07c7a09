use std::fmt::Display;

pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    if s.contains(' ') {
        format!("({s})")
    } else {
        s
    }
}

// Renders `Σ r·x` from (x, r) pairs given in display order.
// Signs are pulled out of the coefficients, and `1`, `-1` are elided.
pub fn lc<X, R, S>(mut terms: S) -> String
where
    X: Display,
    R: Display,
    S: Iterator<Item = (X, R)>
{
    let mut res: Vec<String> = vec![];

    if let Some((x, r)) = terms.next() {
        let r = paren_expr(r);
        let x = x.to_string();

        let term = if r == "1" {
            x
        } else if r == "-1" {
            format!("-{x}")
        } else if x == "1" {
            r
        } else {
            format!("{r}{x}")
        };

        res.push(term)
    } else {
        return "0".to_string()
    }

    for (x, r) in terms {
        let r = paren_expr(r);
        let x = x.to_string();

        let (op, r) = if let Some(r) = r.strip_prefix('-') {
            ("-", r.to_owned())
        } else {
            ("+", r)
        };

        let term = if r == "1" {
            x
        } else if x == "1" {
            r
        } else {
            format!("{r}{x}")
        };

        res.push(op.to_string());
        res.push(term);
    }

    res.join(" ")
}

pub fn superscript(d: usize) -> String {
    d.to_string().chars().map(|c| match c {
        '1' => '\u{00B9}',
        '2' => '\u{00B2}',
        '3' => '\u{00B3}',
        c => {
            let d = c.to_digit(10).unwrap_or(0);
            char::from_u32(('\u{2070}' as u32) + d).unwrap_or(c)
        }
    }).collect()
}

pub fn fmt_mono(x: &str, d: usize, unicode: bool) -> String {
    if d == 0 {
        "1".to_string()
    } else if d == 1 {
        x.to_string()
    } else if unicode {
        let e = superscript(d);
        format!("{x}{e}")
    } else {
        format!("{x}^{d}")
    }
}
