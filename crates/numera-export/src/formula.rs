//! Formula rewriting for graphing hosts whose evaluators have no infix
//! power operator.
//!
//! `rewrite_powers` turns `base ^ exponent` (and the `**` spelling) into
//! `pow(base, exponent)` calls, preserving precedence. The delicate part
//! is unary minus: `-x^2` means `-(x^2)`, so the minus must end up
//! *outside* the generated call (`-pow(x,2)`), while the minus in `3-x^2`
//! is a binary operator and stays where it is.

/// Rewrite every power operator in `expr` into a `pow(...)` call.
///
/// A leading `Math.` namespace prefix on function names is stripped first,
/// since the target context exposes those names unqualified. Powers are
/// rewritten leftmost-first, which makes chains left-associative:
/// `x^y^z` becomes `pow(pow(x,y),z)`.
///
/// Malformed input (a dangling `^`, unbalanced brackets) degrades to a
/// malformed output string; the host rejects it there. This function
/// never fails.
pub fn rewrite_powers(expr: &str) -> String {
    let cleaned = expr.trim().replace("Math.", "").replace("**", "^");
    let mut s: Vec<char> = cleaned.chars().collect();

    while let Some(idx) = s.iter().position(|&c| c == '^') {
        let left = left_operand(&s, idx as isize - 1);
        let right = right_operand(&s, idx + 1);

        let base: String = s[left.start..left.end].iter().collect();
        let exponent: String = s[right.start..right.end].iter().collect();

        // a minus directly before an unparenthesized base binds to the
        // whole power, not the base
        let minus_pos = left.start as isize - 1;
        let unary_minus = minus_pos >= 0
            && s[minus_pos as usize] == '-'
            && !left.parenthesized
            && minus_is_unary(&s, minus_pos as usize);

        let prefix_end = if unary_minus {
            left.start - 1
        } else {
            left.start
        };

        let mut rewritten: Vec<char> = s[..prefix_end].to_vec();
        if unary_minus {
            rewritten.push('-');
        }
        rewritten.extend(format!("pow({},{})", base, exponent).chars());
        rewritten.extend_from_slice(&s[right.end..]);
        s = rewritten;
    }

    s.into_iter().collect()
}

struct Operand {
    start: usize,
    /// exclusive
    end: usize,
    parenthesized: bool,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '$'
}

/// Scan left from the character before `^` for the base: a parenthesized
/// group (matched by bracket depth, pulling in the call name when the
/// group is a function call's argument list) or a maximal
/// identifier/number token.
fn left_operand(s: &[char], from: isize) -> Operand {
    let mut i = from;
    while i >= 0 && s[i as usize].is_whitespace() {
        i -= 1;
    }
    if i < 0 {
        return Operand {
            start: 0,
            end: 0,
            parenthesized: false,
        };
    }

    if s[i as usize] == ')' {
        let mut depth = 0;
        let mut j = i;
        while j >= 0 {
            match s[j as usize] {
                ')' => depth += 1,
                '(' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            j -= 1;
        }
        let mut start = j.max(0) as usize;
        // sin(x)^2: the base is the whole call, not just "(x)"
        while start > 0 && is_ident_char(s[start - 1]) {
            start -= 1;
        }
        Operand {
            start,
            end: i as usize + 1,
            parenthesized: true,
        }
    } else {
        let mut j = i;
        while j >= 0 && is_ident_char(s[j as usize]) {
            j -= 1;
        }
        Operand {
            start: (j + 1) as usize,
            end: i as usize + 1,
            parenthesized: false,
        }
    }
}

/// Scan right from the character after `^` for the exponent: a
/// parenthesized group, or an optional sign followed by a maximal token,
/// itself extended over an argument list when the token is a call name.
fn right_operand(s: &[char], from: usize) -> Operand {
    let len = s.len();
    let mut i = from;
    while i < len && s[i].is_whitespace() {
        i += 1;
    }
    if i >= len {
        return Operand {
            start: len,
            end: len,
            parenthesized: false,
        };
    }

    if s[i] == '(' {
        Operand {
            start: i,
            end: skip_group(s, i),
            parenthesized: true,
        }
    } else {
        let mut j = i;
        if s[j] == '+' || s[j] == '-' {
            j += 1;
        }
        while j < len && is_ident_char(s[j]) {
            j += 1;
        }
        // x^sin(y): the exponent is the whole call
        if j < len && s[j] == '(' {
            j = skip_group(s, j);
        }
        Operand {
            start: i,
            end: j,
            parenthesized: false,
        }
    }
}

/// Index just past the bracket group opening at `open`.
fn skip_group(s: &[char], open: usize) -> usize {
    let len = s.len();
    let mut depth = 0;
    let mut j = open;
    while j < len {
        match s[j] {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
        j += 1;
    }
    (j + 1).min(len)
}

/// A minus is unary when nothing, or another operator, precedes it.
fn minus_is_unary(s: &[char], minus_pos: usize) -> bool {
    let mut k = minus_pos as isize - 1;
    while k >= 0 && s[k as usize].is_whitespace() {
        k -= 1;
    }
    if k < 0 {
        return true;
    }
    matches!(
        s[k as usize],
        '=' | '+' | '-' | '*' | '/' | '^' | ',' | '(' | '?' | ':'
    )
}
