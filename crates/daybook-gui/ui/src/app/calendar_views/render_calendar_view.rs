fn render_calendar_view(
  view: CalendarViewMode,
  focus: NaiveDate,
  selected: NaiveDate,
  today: NaiveDate,
  week_start: Weekday,
  now_minute: u32,
  entries: &[DayEvent],
  track_ref: &NodeRef,
  menu_open: Option<Uuid>,
  on_select_date: Callback<NaiveDate>,
  on_track_click: Callback<(
    NaiveDate,
    MouseEvent
  )>,
  on_event_menu: Callback<Uuid>,
  on_event_edit: Callback<Uuid>,
  on_event_delete: Callback<Uuid>
) -> Html {
  match view {
    | CalendarViewMode::Month => {
      render_calendar_month_view(
        focus,
        selected,
        today,
        week_start,
        entries,
        on_select_date
      )
    }
    | CalendarViewMode::Week => {
      render_calendar_week_view(
        focus,
        today,
        week_start,
        now_minute,
        entries,
        track_ref,
        menu_open,
        on_track_click,
        on_event_menu,
        on_event_edit,
        on_event_delete
      )
    }
    | CalendarViewMode::Day => {
      render_calendar_day_view(
        focus,
        today,
        now_minute,
        entries,
        track_ref,
        menu_open,
        on_track_click,
        on_event_menu,
        on_event_edit,
        on_event_delete
      )
    }
  }
}
