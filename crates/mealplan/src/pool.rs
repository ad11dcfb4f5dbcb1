use menuplan_shared::{MealSlot, Profile};

/// Fixed dish lists of a profile, one per meal slot.
pub struct DishPool {
    pub breakfast: [&'static str; 4],
    pub lunch: [&'static str; 4],
    pub snack: [&'static str; 4],
    pub dinner: [&'static str; 4],
}

impl DishPool {
    pub fn slot(&self, slot: MealSlot) -> &[&'static str] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }
}

pub fn dish_pool(profile: Profile) -> &'static DishPool {
    match profile {
        Profile::Balanced => &BALANCED,
        Profile::HighProtein => &HIGH_PROTEIN,
        Profile::Vegetarian => &VEGETARIAN,
        Profile::Quick => &QUICK,
    }
}

static BALANCED: DishPool = DishPool {
    breakfast: [
        "Омлет с томатами и тостом",
        "Овсянка с бананом и орехами",
        "Творог с ягодами и мёдом",
        "Яйца + цельнозерновой тост + огурец",
    ],
    lunch: [
        "Куриная грудка с рисом и овощами",
        "Паста с индейкой и томатным соусом",
        "Рыба с картофелем и салатом",
        "Домашний бургер с овощами",
    ],
    snack: [
        "Йогурт + гранола + яблоко",
        "Хлебцы с творожным сыром",
        "Орехи и фрукты",
        "Банан + арахисовая паста",
    ],
    dinner: [
        "Запечённая рыба с овощами",
        "Индейка с гречкой",
        "Курица в духовке + салат",
        "Говядина с овощами на гриле",
    ],
};

static HIGH_PROTEIN: DishPool = DishPool {
    breakfast: [
        "Яичница с индейкой и сыром",
        "Омлет с курицей и шпинатом",
        "Творог 5% + ягоды + орехи",
        "Скрэмбл с лососем и тостом",
    ],
    lunch: [
        "Стейк + запечённый картофель + салат",
        "Курица терияки с рисом",
        "Тунец + киноа + овощи",
        "Индейка с гречкой и брокколи",
    ],
    snack: [
        "Протеиновый йогурт + фрукт",
        "Сырники без сахара",
        "Яйца и овощи",
        "Протеиновый смузи",
    ],
    dinner: [
        "Лосось + спаржа",
        "Куриные котлеты + овощи",
        "Телятина + салат",
        "Омлет с овощами и сыром",
    ],
};

static VEGETARIAN: DishPool = DishPool {
    breakfast: [
        "Овсянка на растительном молоке + ягоды",
        "Тост с авокадо и яйцом",
        "Гранола + йогурт",
        "Сырники с фруктами",
    ],
    lunch: [
        "Паста с грибами и сливочным соусом",
        "Булгур с фалафелем и овощами",
        "Гречка с тофу и овощами",
        "Карри из нута с рисом",
    ],
    snack: [
        "Фрукты + орехи",
        "Хумус с овощами",
        "Йогурт и мюсли",
        "Смузи из банана и ягод",
    ],
    dinner: [
        "Запечённые овощи + сыр",
        "Тофу терияки с салатом",
        "Овощная лазанья",
        "Крем-суп + тост",
    ],
};

static QUICK: DishPool = DishPool {
    breakfast: [
        "Овсянка 5 минут + банан",
        "Йогурт + мюсли + ягоды",
        "Яйца в микроволновке + тост",
        "Тост с арахисовой пастой и яблоком",
    ],
    lunch: [
        "Гречка + готовая курица + овощи",
        "Паста + тунец + томаты",
        "Лаваш-ролл с индейкой",
        "Рис + омлет + овощи",
    ],
    snack: [
        "Протеиновый батончик + фрукт",
        "Орехи + яблоко",
        "Кефир + банан",
        "Творожок + ягоды",
    ],
    dinner: [
        "Рыба в духовке 20 минут + салат",
        "Курица на сковороде + овощи",
        "Омлет с сыром + овощи",
        "Лёгкая шакшука",
    ],
};
