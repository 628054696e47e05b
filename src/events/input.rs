/// Дискретные события ввода для машины состояний выбора.
///
/// Все мутации сеанса проходят через единственную точку диспетчеризации
/// (`Session::apply`), поэтому блокировки не нужны.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Добавить символ к запросу (курсор сбрасывается на 0)
    AppendChar(char),
    /// Удалить последний символ запроса (no-op при пустом запросе)
    Backspace,
    /// Очистить запрос целиком
    Clear,
    /// Перейти к следующему кандидату
    Next,
    /// Перейти к предыдущему кандидату
    Prev,
    /// Выбрать кандидата по индексу 0..=8 и сразу активировать
    JumpTo(usize),
    /// Активировать кандидата под курсором
    Confirm,
    /// Завершить сеанс без активации
    Cancel,
}
