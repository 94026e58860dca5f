//! Documentation content for qrius CLI

/// Grammar reference printed by `qrius docs`
pub fn get_docs() -> &'static str {
    DOCS
}

const DOCS: &str = r#"QRIUS FILTER LANGUAGE

A filter selects records by comparing fields against literal values and
combining the comparisons with boolean operators.

  name eq 'John' or age gt 0 and age le 18

COMPARISONS
  <field> <operator> <value>

    Operators:  eq  ne  gt  ge  lt  le

    Example:
      Filter:    age ge 18
      Canonical: (age ge 18)

    Constraints:
      - The left side must be a field name
      - The right side must be a literal, never another field
      - null is only allowed with eq and ne

FIELDS
  Letters, digits, '_', '-' and '.', starting with a letter or '_'.

    user.name   user-name   _internal   nam3

  Field names are case-sensitive. NULL and Null are fields, null is not.

VALUES
  42          Integer (decimal digits)
  'John'      String (single quotes)
  null        Null

LOGICAL OPERATORS
  not <filter>
  <filter> and <filter>
  <filter> or <filter>

    Binding, loosest first:  or  <  and  <  not  <  comparison

    Example:
      Filter:    not name eq 'john' and age le 50
      Canonical: ((not (name eq 'john')) and (age le 50))

GROUPING
  ( <filter> )

    Parentheses override precedence. A parenthesized literal such as
    (null) is not a filter.

INVALID FILTERS
  null              a value on its own is not a filter
  not null          not only negates filters
  1 gt 2            left side must be a field
  name eq value     right side must be a literal
  age gt null       null needs eq or ne
  (name eq 'John'   missing closing parenthesis

Run 'qrius check "<filter>"' to validate a filter and print its canonical form.
Run 'qrius tokens "<filter>"' to see how a filter is tokenized.
"#;
