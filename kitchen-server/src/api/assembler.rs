//! 响应组装
//!
//! Maps domain entities (shared::models) to transport shapes (shared::response).

use shared::models::{Menu, MenuGroup, Order, OrderTable, Product, TableGroup};
use shared::response::{
    MenuGroupResponse, MenuProductResponse, MenuResponse, OrderLineItemResponse, OrderResponse,
    OrderTableResponse, ProductResponse, TableGroupResponse,
};

pub fn product(p: Product) -> ProductResponse {
    ProductResponse {
        id: p.id,
        name: p.name,
        price: p.price,
    }
}

pub fn menu_group(g: MenuGroup) -> MenuGroupResponse {
    MenuGroupResponse {
        id: g.id,
        name: g.name,
    }
}

pub fn menu(m: Menu) -> MenuResponse {
    MenuResponse {
        id: m.id,
        name: m.name,
        price: m.price,
        menu_group_id: m.menu_group_id,
        menu_products: m
            .menu_products
            .into_iter()
            .map(|mp| MenuProductResponse {
                seq: mp.seq,
                product_id: mp.product_id,
                quantity: mp.quantity,
            })
            .collect(),
    }
}

pub fn order_table(t: OrderTable) -> OrderTableResponse {
    OrderTableResponse {
        id: t.id,
        table_group_id: t.table_group_id,
        number_of_guests: t.number_of_guests,
        empty: t.empty,
    }
}

pub fn order(o: Order) -> OrderResponse {
    OrderResponse {
        id: o.id,
        order_table_id: o.order_table_id,
        order_status: o.order_status,
        ordered_time: o.ordered_time,
        order_line_items: o
            .order_line_items
            .into_iter()
            .map(|item| OrderLineItemResponse {
                seq: item.seq,
                menu_id: item.menu_id,
                quantity: item.quantity,
            })
            .collect(),
    }
}

pub fn table_group(g: TableGroup) -> TableGroupResponse {
    TableGroupResponse {
        id: g.id,
        created_date: g.created_date,
        order_tables: g.order_tables.into_iter().map(order_table).collect(),
    }
}

/// Map a list with one of the assemblers above
pub fn all<T, R>(items: Vec<T>, f: fn(T) -> R) -> Vec<R> {
    items.into_iter().map(f).collect()
}
