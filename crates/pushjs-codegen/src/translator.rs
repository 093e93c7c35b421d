//! Recursive translator from expression trees to JavaScript fragments

use std::collections::HashSet;

use pushjs_ir::{ArithOp, ColumnResolver, ColumnRole, DataType, DateField, Expr, ExprKind};
use tracing::trace;

use crate::coerce::{coerce, to_date_like};
use crate::error::CompileError;
use crate::fragment::CodeFragment;
use crate::names::{is_usable_identifier, quote_string, receiver, TempNames};

/// Per-compilation translation state.
///
/// Owns the temporary allocator, the input parameter list and the set of
/// temporaries bound by `ToDate`. Create one per compile and drop it after.
pub struct Translator<'a> {
    resolver: &'a dyn ColumnResolver,
    allow_multiple_inputs: bool,
    names: TempNames,
    inputs: Vec<String>,
    date_temporaries: HashSet<String>,
}

impl<'a> Translator<'a> {
    pub fn new(resolver: &'a dyn ColumnResolver, allow_multiple_inputs: bool) -> Self {
        Self {
            resolver,
            allow_multiple_inputs,
            names: TempNames::new(),
            inputs: Vec::new(),
            date_temporaries: HashSet::new(),
        }
    }

    /// Column identifiers referenced so far, in first-seen order
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn into_inputs(self) -> Vec<String> {
        self.inputs
    }

    pub fn is_date_temporary(&self, name: &str) -> bool {
        self.date_temporaries.contains(name)
    }

    pub fn translate(&mut self, expr: &Expr) -> Result<CodeFragment, CompileError> {
        match &expr.kind {
            ExprKind::Column { name } => self.translate_column(name),
            ExprKind::Literal { value } => translate_literal(value.as_deref(), expr.data_type),
            ExprKind::Cast { expr: inner } => {
                let child = self.translate(inner)?;
                self.cast(child, expr.data_type)
            }
            ExprKind::Concat { args } => self.translate_concat(args),
            ExprKind::Upper { expr: inner } => self.translate_case(inner, "upper", "toUpperCase"),
            ExprKind::Lower { expr: inner } => self.translate_case(inner, "lower", "toLowerCase"),
            ExprKind::Substring { expr: inner, pos, len } => self.translate_substring(inner, pos, len),
            ExprKind::ToDate { expr: inner } => self.translate_to_date(inner),
            ExprKind::DateAdd { date, days } => self.translate_date_shift(date, days, "date_add", "+"),
            ExprKind::DateSub { date, days } => self.translate_date_shift(date, days, "date_sub", "-"),
            ExprKind::Extract { field, expr: inner } => self.translate_extract(*field, inner),
            ExprKind::Arithmetic { op, left, right } => {
                self.translate_arithmetic(*op, left, right, expr.data_type)
            }
        }
    }

    /// Apply the coercion matrix to a translated fragment
    pub fn cast(&self, fragment: CodeFragment, to: DataType) -> Result<CodeFragment, CompileError> {
        let from = fragment.result_type;
        if from == to {
            return Ok(fragment);
        }

        let is_date_temporary = fragment
            .bound_name
            .as_deref()
            .is_some_and(|name| self.is_date_temporary(name));
        let (statements, value) = fragment.into_parts();
        let code = coerce(&value, from, to, is_date_temporary)
            .ok_or(CompileError::UnsupportedCast { from, to })?;

        Ok(CodeFragment::inline(statements, code, to))
    }

    fn translate_column(&mut self, name: &str) -> Result<CodeFragment, CompileError> {
        let column = self
            .resolver
            .lookup(name)
            .ok_or_else(|| CompileError::UnknownColumn(name.to_string()))?;

        let ident = match column.role {
            ColumnRole::Measure => return Err(CompileError::MeasureColumn(name.to_string())),
            ColumnRole::TimeDimension => column.canonical_name,
            ColumnRole::Dimension => name.to_string(),
        };
        if !is_usable_identifier(&ident) {
            return Err(CompileError::InvalidIdentifier(ident));
        }

        self.register_input(&ident)?;
        Ok(CodeFragment::inline(Vec::new(), ident, column.data_type))
    }

    fn register_input(&mut self, ident: &str) -> Result<(), CompileError> {
        if self.inputs.iter().any(|seen| seen == ident) {
            return Ok(());
        }
        if !self.allow_multiple_inputs {
            if let Some(first) = self.inputs.first() {
                return Err(CompileError::MultipleInputs {
                    first: first.clone(),
                    second: ident.to_string(),
                });
            }
        }
        self.inputs.push(ident.to_string());
        Ok(())
    }

    fn translate_as_string(&mut self, expr: &Expr) -> Result<CodeFragment, CompileError> {
        let fragment = self.translate(expr)?;
        self.cast(fragment, DataType::String)
    }

    fn translate_concat(&mut self, args: &[Expr]) -> Result<CodeFragment, CompileError> {
        let (first, rest) = args.split_first().ok_or(CompileError::EmptyConcat)?;

        let (mut statements, mut acc) = self.translate_as_string(first)?.into_parts();
        for arg in rest {
            let (arg_statements, value) = self.translate_as_string(arg)?.into_parts();
            statements.extend(arg_statements);
            acc = format!("{}.concat({})", receiver(&acc), value);
        }

        Ok(CodeFragment::inline(statements, acc, DataType::String))
    }

    fn translate_case(
        &mut self,
        inner: &Expr,
        func: &'static str,
        method: &str,
    ) -> Result<CodeFragment, CompileError> {
        let child = self.translate(inner)?;
        if child.result_type != DataType::String {
            return Err(CompileError::OperandType {
                func,
                expected: "String",
                actual: child.result_type,
            });
        }

        let (statements, value) = child.into_parts();
        Ok(CodeFragment::inline(
            statements,
            format!("{}.{}()", receiver(&value), method),
            DataType::String,
        ))
    }

    fn translate_substring(&mut self, inner: &Expr, pos: &Expr, len: &Expr) -> Result<CodeFragment, CompileError> {
        if !pos.is_literal() {
            return Err(CompileError::NonLiteralArgument {
                func: "substring",
                arg: "position",
            });
        }
        if !len.is_literal() {
            return Err(CompileError::NonLiteralArgument {
                func: "substring",
                arg: "length",
            });
        }

        let (mut statements, value) = self.translate_as_string(inner)?.into_parts();
        let pos = self.translate_integral(pos, "substring")?;
        let len = self.translate_integral(len, "substring")?;
        statements.extend(pos.statements);
        statements.extend(len.statements);

        Ok(CodeFragment::inline(
            statements,
            format!("{}.substr({}, {})", receiver(&value), pos.inline_expr, len.inline_expr),
            DataType::String,
        ))
    }

    fn translate_integral(&mut self, expr: &Expr, func: &'static str) -> Result<CodeFragment, CompileError> {
        let fragment = self.translate(expr)?;
        if !fragment.result_type.is_integral() {
            return Err(CompileError::OperandType {
                func,
                expected: "integral",
                actual: fragment.result_type,
            });
        }
        Ok(fragment)
    }

    fn translate_to_date(&mut self, inner: &Expr) -> Result<CodeFragment, CompileError> {
        let child = self.translate(inner)?;
        let from = child.result_type;
        let (mut statements, value) = child.into_parts();
        let init = fresh_date(&value, from).ok_or(CompileError::OperandType {
            func: "to_date",
            expected: "date-like",
            actual: from,
        })?;

        let name = self.names.fresh();
        statements.push(format!("var {} = {};", name, init));
        statements.push(format!("{}.setUTCHours(0, 0, 0, 0);", name));
        trace!(temp = %name, from = %from, "bound day-truncated date temporary");

        self.date_temporaries.insert(name.clone());
        Ok(CodeFragment::bound(name, statements, DataType::Date))
    }

    fn translate_date_shift(
        &mut self,
        date: &Expr,
        days: &Expr,
        func: &'static str,
        sign: &str,
    ) -> Result<CodeFragment, CompileError> {
        let base = self.translate(date)?;
        let base_type = base.result_type;
        let delta = self.translate_integral(days, func)?;

        let (mut statements, base_value) = base.into_parts();
        let init = fresh_date(&base_value, base_type).ok_or(CompileError::OperandType {
            func,
            expected: "date-like",
            actual: base_type,
        })?;
        let (delta_statements, delta_value) = delta.into_parts();
        statements.extend(delta_statements);

        let name = self.names.fresh();
        statements.push(format!("var {} = {};", name, init));
        statements.push(format!(
            "{name}.setUTCDate({name}.getUTCDate() {sign} ({delta}));",
            name = name,
            sign = sign,
            delta = delta_value
        ));
        trace!(temp = %name, func, "bound shifted date temporary");

        Ok(CodeFragment::bound(name, statements, DataType::Date))
    }

    fn translate_extract(&mut self, field: DateField, inner: &Expr) -> Result<CodeFragment, CompileError> {
        let child = self.translate(inner)?;
        let from = child.result_type;
        let (statements, value) = child.into_parts();
        let date = to_date_like(&value, from).ok_or(CompileError::OperandType {
            func: field_func(field),
            expected: "date-like",
            actual: from,
        })?;

        let target = receiver(&date);
        let code = match field {
            DateField::Year => format!("{}.getUTCFullYear()", target),
            DateField::Month => format!("({}.getUTCMonth() + 1)", target),
            DateField::Hour => format!("{}.getUTCHours()", target),
            DateField::Minute => format!("{}.getUTCMinutes()", target),
            DateField::Second => format!("{}.getUTCSeconds()", target),
        };

        Ok(CodeFragment::inline(statements, code, DataType::Integer))
    }

    fn translate_arithmetic(
        &mut self,
        op: ArithOp,
        left: &Expr,
        right: &Expr,
        result_type: DataType,
    ) -> Result<CodeFragment, CompileError> {
        let (mut statements, lhs) = self.translate(left)?.into_parts();
        let (rhs_statements, rhs) = self.translate(right)?.into_parts();
        statements.extend(rhs_statements);

        Ok(CodeFragment::inline(
            statements,
            format!("({}) {} ({})", lhs, op.symbol(), rhs),
            result_type,
        ))
    }
}

fn translate_literal(value: Option<&str>, data_type: DataType) -> Result<CodeFragment, CompileError> {
    let value = match value {
        Some(value) if data_type != DataType::Null => value,
        _ => return Ok(CodeFragment::inline(Vec::new(), "null", DataType::Null)),
    };

    if data_type.is_numeric() {
        if !is_numeric_text(value, data_type.is_integral()) {
            return Err(CompileError::InvalidLiteral {
                value: value.to_string(),
                data_type,
            });
        }
        return Ok(CodeFragment::inline(Vec::new(), value, data_type));
    }

    if data_type == DataType::Boolean {
        return match value {
            "true" | "false" => Ok(CodeFragment::inline(Vec::new(), value, DataType::Boolean)),
            _ => Err(CompileError::InvalidLiteral {
                value: value.to_string(),
                data_type,
            }),
        };
    }

    let quoted = quote_string(value);
    if data_type == DataType::String {
        return Ok(CodeFragment::inline(Vec::new(), quoted, DataType::String));
    }

    let code = coerce(&quoted, DataType::String, data_type, false).ok_or(CompileError::UnsupportedCast {
        from: DataType::String,
        to: data_type,
    })?;
    Ok(CodeFragment::inline(Vec::new(), code, data_type))
}

fn is_numeric_text(text: &str, integral: bool) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    // "010" is octal in sloppy-mode ES5 and a syntax error as "010.5"
    let mut digits = body.chars();
    if digits.next() == Some('0') && digits.next().is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }
    if integral {
        return !body.is_empty() && body.chars().all(|c| c.is_ascii_digit());
    }

    body.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && body.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && body.parse::<f64>().is_ok()
}

// A new Date object that is safe to mutate. ES5 `new Date(date)` goes
// through the string form and drops milliseconds, so copy by epoch.
fn fresh_date(value: &str, from: DataType) -> Option<String> {
    match from {
        DataType::Date => Some(format!("new Date({}.getTime())", receiver(value))),
        _ => to_date_like(value, from),
    }
}

fn field_func(field: DateField) -> &'static str {
    match field {
        DateField::Year => "year",
        DateField::Month => "month",
        DateField::Hour => "hour",
        DateField::Minute => "minute",
        DateField::Second => "second",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pushjs_ir::{ColumnDef, SchemaResolver};

    fn schema() -> SchemaResolver {
        SchemaResolver::from_defs(vec![
            ColumnDef::new("l_shipmode", ColumnRole::Dimension, DataType::String),
            ColumnDef::new("l_comment", ColumnRole::Dimension, DataType::String),
            ColumnDef::new("l_linenumber", ColumnRole::Dimension, DataType::Long),
            ColumnDef::new("l_quantity", ColumnRole::Measure, DataType::Long),
            ColumnDef::time_dimension("l_shipdate", "__time", DataType::Timestamp),
        ])
        .unwrap()
    }

    fn translate(expr: &Expr) -> Result<CodeFragment, CompileError> {
        let schema = schema();
        let mut translator = Translator::new(&schema, true);
        translator.translate(expr)
    }

    fn col(name: &str, data_type: DataType) -> Expr {
        Expr::column(name, data_type)
    }

    #[test]
    fn test_dimension_column() {
        let fragment = translate(&col("l_shipmode", DataType::String)).unwrap();
        assert_eq!(fragment.inline_expr, "l_shipmode");
        assert_eq!(fragment.result_type, DataType::String);
        assert!(fragment.statements.is_empty());
    }

    #[test]
    fn test_time_dimension_uses_canonical_name() {
        let fragment = translate(&col("l_shipdate", DataType::Timestamp)).unwrap();
        assert_eq!(fragment.inline_expr, "__time");
        assert_eq!(fragment.result_type, DataType::Timestamp);
    }

    #[test]
    fn test_measure_and_unknown_columns_fail() {
        assert_eq!(
            translate(&col("l_quantity", DataType::Long)),
            Err(CompileError::MeasureColumn("l_quantity".to_string()))
        );
        assert_eq!(
            translate(&col("nope", DataType::Long)),
            Err(CompileError::UnknownColumn("nope".to_string()))
        );
    }

    #[test]
    fn test_column_name_must_be_identifier() {
        let schema =
            SchemaResolver::from_defs(vec![ColumnDef::new("ship-mode", ColumnRole::Dimension, DataType::String)])
                .unwrap();
        let mut translator = Translator::new(&schema, false);
        assert!(matches!(
            translator.translate(&col("ship-mode", DataType::String)),
            Err(CompileError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_literals() {
        assert_eq!(translate(&Expr::literal("42", DataType::Integer)).unwrap().inline_expr, "42");
        assert_eq!(translate(&Expr::literal("-2.5e3", DataType::Double)).unwrap().inline_expr, "-2.5e3");
        assert_eq!(translate(&Expr::literal("0", DataType::Integer)).unwrap().inline_expr, "0");
        assert_eq!(translate(&Expr::literal("0.25", DataType::Double)).unwrap().inline_expr, "0.25");
        assert_eq!(translate(&Expr::literal("AIR", DataType::String)).unwrap().inline_expr, "'AIR'");

        let null = translate(&Expr::null()).unwrap();
        assert_eq!(null.inline_expr, "null");
        assert_eq!(null.result_type, DataType::Null);

        let date = translate(&Expr::literal("1995-03-15", DataType::Date)).unwrap();
        assert_eq!(date.inline_expr, "new Date('1995-03-15')");
        assert_eq!(date.result_type, DataType::Date);

        let flag = translate(&Expr::literal("true", DataType::Boolean)).unwrap();
        assert_eq!(flag.inline_expr, "true");
        assert_eq!(flag.result_type, DataType::Boolean);
    }

    #[test]
    fn test_boolean_literals_are_emitted_bare() {
        let flag = translate(&Expr::literal("false", DataType::Boolean)).unwrap();
        assert_eq!(flag.inline_expr, "false");

        // Boolean('false') would be true at run time
        let expr = Expr::arithmetic(
            ArithOp::Add,
            col("l_linenumber", DataType::Long),
            Expr::literal("false", DataType::Boolean),
            DataType::Long,
        );
        assert_eq!(translate(&expr).unwrap().inline_expr, "(l_linenumber) + (false)");

        for text in ["False", "0", "", "yes"] {
            assert_eq!(
                translate(&Expr::literal(text, DataType::Boolean)),
                Err(CompileError::InvalidLiteral {
                    value: text.to_string(),
                    data_type: DataType::Boolean,
                })
            );
        }
    }

    #[test]
    fn test_malformed_numeric_literals_fail() {
        for (text, data_type) in [
            ("NaN", DataType::Double),
            ("inf", DataType::Double),
            ("1.5", DataType::Integer),
            ("", DataType::Long),
            ("x", DataType::Float),
            ("010", DataType::Integer),
            ("007", DataType::Long),
            ("-010", DataType::Short),
            ("010.5", DataType::Double),
        ] {
            assert!(
                matches!(
                    translate(&Expr::literal(text, data_type)),
                    Err(CompileError::InvalidLiteral { .. })
                ),
                "{:?} as {}",
                text,
                data_type
            );
        }
    }

    #[test]
    fn test_cast_applies_matrix() {
        let expr = Expr::cast(col("l_shipmode", DataType::String), DataType::Integer);
        let fragment = translate(&expr).unwrap();
        assert_eq!(fragment.inline_expr, "parseInt(l_shipmode, 10)");
        assert_eq!(fragment.result_type, DataType::Integer);

        let bad = Expr::cast(Expr::literal("true", DataType::Boolean), DataType::Date);
        assert_eq!(
            translate(&bad),
            Err(CompileError::UnsupportedCast {
                from: DataType::Boolean,
                to: DataType::Date
            })
        );
    }

    #[test]
    fn test_concat_chains_left_to_right() {
        let expr = Expr::concat(vec![
            col("l_shipmode", DataType::String),
            Expr::literal("-", DataType::String),
            col("l_comment", DataType::String),
        ]);
        let fragment = translate(&expr).unwrap();
        assert_eq!(fragment.inline_expr, "(l_shipmode.concat('-')).concat(l_comment)");
        assert_eq!(fragment.inline_expr.matches(".concat(").count(), 2);
    }

    #[test]
    fn test_concat_fails_when_any_element_fails() {
        let expr = Expr::concat(vec![
            col("l_shipmode", DataType::String),
            col("l_quantity", DataType::Long),
            col("l_comment", DataType::String),
        ]);
        assert_eq!(
            translate(&expr),
            Err(CompileError::MeasureColumn("l_quantity".to_string()))
        );
        assert_eq!(translate(&Expr::concat(vec![])), Err(CompileError::EmptyConcat));
    }

    #[test]
    fn test_concat_coerces_non_strings() {
        let expr = Expr::concat(vec![
            col("l_linenumber", DataType::Long),
            Expr::literal("x", DataType::String),
        ]);
        assert_eq!(
            translate(&expr).unwrap().inline_expr,
            "(l_linenumber.toString()).concat('x')"
        );
    }

    #[test]
    fn test_upper_lower_require_strings() {
        assert_eq!(
            translate(&Expr::upper(col("l_shipmode", DataType::String))).unwrap().inline_expr,
            "l_shipmode.toUpperCase()"
        );
        assert_eq!(
            translate(&Expr::lower(Expr::literal("MAIL", DataType::String))).unwrap().inline_expr,
            "('MAIL').toLowerCase()"
        );
        assert_eq!(
            translate(&Expr::upper(Expr::literal("5", DataType::Integer))),
            Err(CompileError::OperandType {
                func: "upper",
                expected: "String",
                actual: DataType::Integer
            })
        );
    }

    #[test]
    fn test_substring_requires_literal_bounds() {
        let ok = Expr::substring(
            col("l_shipmode", DataType::String),
            Expr::literal("2", DataType::Integer),
            Expr::literal("5", DataType::Integer),
        );
        assert_eq!(translate(&ok).unwrap().inline_expr, "l_shipmode.substr(2, 5)");

        let bad = Expr::substring(
            col("l_shipmode", DataType::String),
            col("l_linenumber", DataType::Long),
            Expr::literal("5", DataType::Integer),
        );
        assert_eq!(
            translate(&bad),
            Err(CompileError::NonLiteralArgument {
                func: "substring",
                arg: "position"
            })
        );
    }

    #[test]
    fn test_to_date_binds_truncated_temporary() {
        let schema = schema();
        let mut translator = Translator::new(&schema, false);
        let fragment = translator
            .translate(&Expr::to_date(col("l_shipdate", DataType::Timestamp)))
            .unwrap();

        assert_eq!(fragment.bound_name.as_deref(), Some("__v0"));
        assert!(fragment.inline_expr.is_empty());
        assert_eq!(fragment.result_type, DataType::Date);
        assert_eq!(
            fragment.statements,
            vec![
                "var __v0 = new Date(__time);".to_string(),
                "__v0.setUTCHours(0, 0, 0, 0);".to_string(),
            ]
        );
        assert!(translator.is_date_temporary("__v0"));
    }

    #[test]
    fn test_to_date_rejects_non_date_like() {
        assert!(matches!(
            translate(&Expr::to_date(Expr::literal("1.5", DataType::Double))),
            Err(CompileError::OperandType { func: "to_date", .. })
        ));
    }

    #[test]
    fn test_date_temporary_string_cast_keeps_day() {
        let schema = schema();
        let mut translator = Translator::new(&schema, false);
        let day = translator
            .translate(&Expr::to_date(col("l_shipmode", DataType::String)))
            .unwrap();
        let text = translator.cast(day, DataType::String).unwrap();
        assert_eq!(text.inline_expr, "__v0.toISOString().substring(0, 10)");

        let plain = translator
            .translate(&Expr::literal("1995-03-15", DataType::Date))
            .unwrap();
        let text = translator.cast(plain, DataType::String).unwrap();
        assert_eq!(text.inline_expr, "(new Date('1995-03-15')).toISOString()");
    }

    #[test]
    fn test_date_add_and_sub() {
        let schema = schema();
        let mut translator = Translator::new(&schema, false);
        let expr = Expr::date_sub(
            Expr::to_date(col("l_shipdate", DataType::Timestamp)),
            Expr::literal("7", DataType::Integer),
        );
        let fragment = translator.translate(&expr).unwrap();

        assert_eq!(fragment.bound_name.as_deref(), Some("__v1"));
        assert_eq!(
            fragment.statements,
            vec![
                "var __v0 = new Date(__time);".to_string(),
                "__v0.setUTCHours(0, 0, 0, 0);".to_string(),
                "var __v1 = new Date(__v0.getTime());".to_string(),
                "__v1.setUTCDate(__v1.getUTCDate() - (7));".to_string(),
            ]
        );
        assert!(!translator.is_date_temporary("__v1"));

        let add = Expr::date_add(
            col("l_shipmode", DataType::String),
            Expr::literal("1", DataType::Integer),
        );
        let fragment = translate(&add).unwrap();
        assert_eq!(fragment.statements[0], "var __v0 = new Date(l_shipmode);");
        assert_eq!(fragment.statements[1], "__v0.setUTCDate(__v0.getUTCDate() + (1));");
    }

    #[test]
    fn test_extract_fields() {
        let ts = || col("l_shipdate", DataType::Timestamp);
        assert_eq!(translate(&Expr::year(ts())).unwrap().inline_expr, "(new Date(__time)).getUTCFullYear()");
        assert_eq!(translate(&Expr::month(ts())).unwrap().inline_expr, "((new Date(__time)).getUTCMonth() + 1)");
        assert_eq!(translate(&Expr::hour(ts())).unwrap().inline_expr, "(new Date(__time)).getUTCHours()");
        assert_eq!(translate(&Expr::minute(ts())).unwrap().inline_expr, "(new Date(__time)).getUTCMinutes()");

        let second = translate(&Expr::second(ts())).unwrap();
        assert_eq!(second.inline_expr, "(new Date(__time)).getUTCSeconds()");
        assert_eq!(second.result_type, DataType::Integer);

        assert!(matches!(
            translate(&Expr::year(Expr::literal("true", DataType::Boolean))),
            Err(CompileError::OperandType { func: "year", .. })
        ));
    }

    #[test]
    fn test_arithmetic_inherits_declared_type() {
        let expr = Expr::arithmetic(
            ArithOp::Mod,
            col("l_linenumber", DataType::Long),
            Expr::literal("2", DataType::Integer),
            DataType::Double,
        );
        let fragment = translate(&expr).unwrap();
        assert_eq!(fragment.inline_expr, "(l_linenumber) % (2)");
        assert_eq!(fragment.result_type, DataType::Double);
    }

    #[test]
    fn test_single_input_mode_rejects_second_column() {
        let schema = schema();
        let expr = Expr::concat(vec![
            col("l_shipmode", DataType::String),
            col("l_shipmode", DataType::String),
            col("l_comment", DataType::String),
        ]);

        let mut single = Translator::new(&schema, false);
        assert_eq!(
            single.translate(&expr),
            Err(CompileError::MultipleInputs {
                first: "l_shipmode".to_string(),
                second: "l_comment".to_string()
            })
        );

        let mut multi = Translator::new(&schema, true);
        assert!(multi.translate(&expr).is_ok());
        assert_eq!(multi.inputs(), ["l_shipmode".to_string(), "l_comment".to_string()]);
    }
}
